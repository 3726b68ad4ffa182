//! Static file server.
//!
//! Serves the output directory as-is: the rendered `index.html` plus any
//! images or stylesheets already next to it. There are no routes.
//!
//! | Method     | Path     | Response                               |
//! |------------|----------|----------------------------------------|
//! | GET, HEAD  | `/`      | `index.html`                           |
//! | GET, HEAD  | `/<path>`| file under the root, or 404            |
//! | other      | any      | 405 Method Not Allowed                 |

use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::BIND_ADDRESS;
use crate::error::ServerError;
use crate::logs::log_info;

/// Router serving files under `root`.
pub fn router(root: impl AsRef<Path>) -> Router {
    let files = ServeDir::new(root.as_ref()).append_index_html_on_directories(true);

    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

/// Bind all interfaces on `port` and serve `root` until the process exits.
pub async fn start_server(root: &Path, port: u16) -> Result<(), ServerError> {
    let addr = SocketAddr::from((BIND_ADDRESS, port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    log_info(format!("🚀 Serving {} on http://localhost:{}", root.display(), port));

    serve(listener, root).await
}

/// Serve `root` on an already bound listener.
pub async fn serve(listener: TcpListener, root: &Path) -> Result<(), ServerError> {
    axum::serve(listener, router(root))
        .await
        .map_err(ServerError::Serve)
}
