use ::config::{Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use validator::Validate;

fn default_addr() -> String {
    "127.0.0.1:8000".into()
}

fn default_docs() -> bool {
    true
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Deserialize, Debug, Validate)]
pub struct Config {
    #[validate(length(min = 1))]
    #[serde(default = "default_addr", alias = "ADDR")]
    pub(crate) addr: String,

    /// Worker threads; actix picks one per physical core when unset.
    #[validate(range(min = 1, max = 512))]
    #[serde(default, alias = "WORKERS")]
    pub(crate) workers: Option<usize>,

    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Serve Redoc and RapiDoc under `/api-docs`.
    #[serde(default = "default_docs", alias = "DOCS")]
    pub(crate) docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            workers: None,
            log_level: LogLevel::default(),
            docs: default_docs(),
        }
    }
}

impl Config {
    const NAME: &'static str = "coffer";
    const ENV: &'static str = "COFFER";

    /// Loads `coffer.toml` (optional) from `dir`, or the working directory,
    /// overlaid with `COFFER_*` environment variables.
    pub fn new<S: AsRef<str>>(dir: Option<S>) -> crate::Result<Self> {
        let file_name = format!(
            "{}",
            PathBuf::from(
                dir.map(|s| String::from(s.as_ref()))
                    .unwrap_or("./".into())
            )
            .join(Self::NAME)
            .display()
        );

        let this: Self = ::config::Config::builder()
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                Environment::with_prefix(Self::ENV)
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        this.validate()?;

        tracing::debug!(config = ?this, "loaded config from {file_name}");
        Ok(this)
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }
}
