//! Pipeline logging.
//!
//! Level-tagged, optionally indented progress messages emitted as `tracing`
//! events, plus the subscriber setup used by the binary.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Log level for pipeline messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth (for sub-steps)
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Message as printed: indentation and level marker prepended.
    pub fn formatted(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "",
            LogLevel::Success => "✓ ",
            LogLevel::Warning => "⚠️ ",
            LogLevel::Error => "❌ ",
        };
        format!("{}{}{}", "   ".repeat(self.indent as usize), prefix, self.message)
    }

    /// Emit the entry through `tracing`.
    pub fn emit(&self) {
        let line = self.formatted();
        match self.level {
            LogLevel::Info | LogLevel::Success => tracing::info!("{}", line),
            LogLevel::Warning => tracing::warn!("{}", line),
            LogLevel::Error => tracing::error!("{}", line),
        }
    }
}

/// Install the global fmt subscriber, writing to stderr.
///
/// Honors `RUST_LOG`; safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LogEntry::info(msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::success(msg).emit();
}

pub fn log_warning(msg: impl Into<String>) {
    LogEntry::warning(msg).emit();
}

pub fn log_error(msg: impl Into<String>) {
    LogEntry::error(msg).emit();
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LogEntry::info(msg).with_indent(indent).emit();
}

pub fn log_success_indent(msg: impl Into<String>, indent: u8) {
    LogEntry::success(msg).with_indent(indent).emit();
}
