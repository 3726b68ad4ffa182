//! Page rendering.
//!
//! Wraps a Jinja-compatible [`minijinja`] environment. Templates whose name
//! ends in `.html`, `.htm` or `.xml` are auto-escaped, so product names and
//! descriptions from the spreadsheet cannot inject markup. Python-style
//! methods (`.items()`, `.get()`, ...) are enabled so existing Jinja
//! templates work unchanged.
//!
//! # Template variables
//!
//! | Name                          | Type    | Example            |
//! |-------------------------------|---------|--------------------|
//! | `age`                         | integer | `105`              |
//! | `word`                        | string  | `"лет"`            |
//! | `wine_and_drinks_by_category` | mapping | category → rows    |
//! | `wine_info`                   | mapping | same as above      |

use minijinja::{context, path_loader, Environment};
use std::path::Path;

use crate::age::AgePhrase;
use crate::error::{TemplateError, TemplateResult};
use crate::models::Catalog;

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
    env
}

/// A loaded page template.
pub struct Renderer {
    env: Environment<'static>,
    name: String,
}

impl Renderer {
    /// Load the template at `path`.
    ///
    /// Sibling files in the same directory are reachable from `{% include %}`
    /// and `{% extends %}`.
    pub fn from_path(path: impl AsRef<Path>) -> TemplateResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(TemplateError::NotFound(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| TemplateError::InvalidPath(path.to_path_buf()))?
            .to_string();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };

        let mut env = environment();
        env.set_loader(path_loader(dir));

        let renderer = Self { env, name };
        // Surface syntax errors before any rendering.
        renderer.env.get_template(&renderer.name)?;
        Ok(renderer)
    }

    /// Build from an in-memory template; `name` decides auto-escaping.
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> TemplateResult<Self> {
        let name = name.into();
        let mut env = environment();
        env.add_template_owned(name.clone(), source.into())?;
        Ok(Self { env, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the page for `catalog` with the founding-age phrase.
    pub fn render(&self, phrase: &AgePhrase, catalog: &Catalog) -> TemplateResult<String> {
        let template = self.env.get_template(&self.name)?;
        let html = template.render(context! {
            age => phrase.age,
            word => phrase.word.as_str(),
            wine_and_drinks_by_category => catalog,
            wine_info => catalog,
        })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawRow, Row};
    use crate::transform::group_by_category;
    use serde_json::json;

    const PAGE: &str = "\
<p>Уже {{ age }} {{ word }} с вами</p>
{% for category, wines in wine_and_drinks_by_category.items() %}\
<h2>{{ category }}</h2>\
{% for wine in wines %}\
<li>{{ wine['Название'] }}|{% if wine['Сорт'] is none %}—{% else %}{{ wine['Сорт'] }}{% endif %}</li>\
{% endfor %}\
{% endfor %}";

    fn sample_catalog() -> Catalog {
        group_by_category(vec![
            RawRow::new(2)
                .with("Категория", "Вино")
                .with("Сорт", "")
                .with("Название", "Мерло"),
            RawRow::new(3)
                .with("Категория", "Вино")
                .with("Сорт", "Белое")
                .with("Название", "Шардоне"),
            RawRow::new(4)
                .with("Категория", "Напитки")
                .with("Сорт", "")
                .with("Название", "Чача"),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_page() {
        let renderer = Renderer::from_source("template.html", PAGE).unwrap();
        let html = renderer
            .render(&AgePhrase::new(105), &sample_catalog())
            .unwrap();

        assert!(html.contains("Уже 105 лет с вами"));
        assert!(html.contains("<li>Мерло|—</li>"));
        assert!(html.contains("<li>Шардоне|Белое</li>"));
        assert!(html.find("<h2>Вино</h2>").unwrap() < html.find("<h2>Напитки</h2>").unwrap());
    }

    #[test]
    fn test_wine_info_alias() {
        let renderer = Renderer::from_source(
            "template.html",
            "{% for c in wine_info %}[{{ c }}]{% endfor %}",
        )
        .unwrap();
        let html = renderer.render(&AgePhrase::new(1), &sample_catalog()).unwrap();
        assert_eq!(html, "[Вино][Напитки]");
    }

    #[test]
    fn test_html_is_escaped() {
        let mut catalog = Catalog::new();
        let mut row = Row::new();
        row.insert("Название".into(), json!("<script>alert(1)</script>"));
        catalog.push("Вино", row);

        let renderer = Renderer::from_source(
            "template.html",
            "{% for c, ws in wine_info.items() %}{% for w in ws %}{{ w['Название'] }}{% endfor %}{% endfor %}",
        )
        .unwrap();
        let html = renderer.render(&AgePhrase::new(1), &catalog).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_plain_text_not_escaped() {
        let renderer = Renderer::from_source("notes.txt", "{{ word }}<b>").unwrap();
        let html = renderer.render(&AgePhrase::new(2), &Catalog::new()).unwrap();
        assert_eq!(html, "года<b>");
    }

    #[test]
    fn test_syntax_error() {
        let result = Renderer::from_source("template.html", "{% for x in %}");
        assert!(matches!(result, Err(TemplateError::Render(_))));
    }

    #[test]
    fn test_undefined_attribute_fails() {
        let renderer = Renderer::from_source("template.html", "{{ nothing.here }}").unwrap();
        let result = renderer.render(&AgePhrase::new(1), &Catalog::new());
        assert!(matches!(result, Err(TemplateError::Render(_))));
    }

    #[test]
    fn test_from_path_with_include() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("header.html"), "<h1>{{ age }}</h1>").unwrap();
        std::fs::write(
            dir.path().join("template.html"),
            "{% include 'header.html' %}<p>{{ word }}</p>",
        )
        .unwrap();

        let renderer = Renderer::from_path(dir.path().join("template.html")).unwrap();
        assert_eq!(renderer.name(), "template.html");
        let html = renderer.render(&AgePhrase::new(21), &Catalog::new()).unwrap();
        assert_eq!(html, "<h1>21</h1><p>год</p>");
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = Renderer::from_path(dir.path().join("absent.html"));
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }
}
