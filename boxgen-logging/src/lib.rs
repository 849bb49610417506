use std::{env, path::Path};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::Layer, prelude::*, registry, EnvFilter, Registry};

const DEFAULT_LOG_FILE: &str = "/tmp/boxgen.log";

/// Where formatted events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
    None,
}

impl LogOutput {
    fn parse(value: &str) -> Self {
        match value {
            "console" => LogOutput::Console,
            "file" => LogOutput::File,
            "both" => LogOutput::Both,
            _ => LogOutput::None,
        }
    }

    fn console(self) -> bool {
        matches!(self, LogOutput::Console | LogOutput::Both)
    }

    fn file(self) -> bool {
        matches!(self, LogOutput::File | LogOutput::Both)
    }
}

/// Logging settings, read from `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT` and
/// `LOG_FILE_PATH`.
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: String,
    pub output: LogOutput,
    pub json: bool,
    pub file_path: String,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            output: LogOutput::parse(
                &env::var("LOG_OUTPUT").unwrap_or_else(|_| "console".to_string()),
            ),
            json: env::var("LOG_FORMAT").is_ok_and(|f| f == "json"),
            file_path: env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
        }
    }

    /// `RUST_LOG` wins over `LOG_LEVEL`; noisy runtime crates are capped at warn.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .ok()
            .or_else(|| EnvFilter::try_new(format!("{},tokio=warn,hyper=warn", self.level)).ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn fmt_layer<W>(writer: W, json: bool) -> BoxedLayer
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer().with_writer(writer);
    if json {
        layer.json().boxed()
    } else {
        layer.pretty().boxed()
    }
}

/// Initializes the global tracing subscriber based on environment variables.
///
/// Keep the returned guard alive for as long as file logging should flush.
pub fn init_subscriber() -> Option<WorkerGuard> {
    init_with(&LogSettings::from_env())
}

pub fn init_with(settings: &LogSettings) -> Option<WorkerGuard> {
    let mut guard = None;
    let mut layers: Vec<BoxedLayer> = Vec::new();

    if settings.output.console() {
        layers.push(fmt_layer(std::io::stdout, settings.json));
    }

    if settings.output.file() {
        let log_path = Path::new(&settings.file_path);
        let log_dir = log_path.parent().unwrap_or_else(|| Path::new("/tmp"));
        let log_filename = log_path.file_name().unwrap_or("boxgen.log".as_ref());

        let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(file_guard);
        layers.push(fmt_layer(non_blocking, settings.json));
    }

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = registry()
        .with(layers)
        .with(settings.env_filter())
        .try_init();

    guard
}
