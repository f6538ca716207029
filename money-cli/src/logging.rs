use std::{
    io::{self, IsTerminal},
    sync::OnceLock,
};

use anyhow::Result;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

// --- Formatter ---

/// `LEVEL file:line message fields`, colored when writing to a terminal.
struct CompactFmt;

impl<S, N> FormatEvent<S, N> for CompactFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let (pre, post) = if ansi {
            match *meta.level() {
                Level::ERROR => ("\x1b[1;31m", "\x1b[0m"),
                Level::WARN => ("\x1b[1;33m", "\x1b[0m"),
                Level::INFO => ("\x1b[1;32m", "\x1b[0m"),
                Level::DEBUG => ("\x1b[1;34m", "\x1b[0m"),
                Level::TRACE => ("\x1b[1;35m", "\x1b[0m"),
            }
        } else {
            ("", "")
        };
        write!(writer, "{}{:>5}{} ", pre, meta.level(), post)?;

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Statics ---

type SetStrFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;

static SET_LOG_LEVEL: OnceLock<SetStrFn> = OnceLock::new();

fn make_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

// --- Public API ---

/// Changes the active log filter at runtime.
/// Accepts a bare level ("warn", "debug", ...) or any EnvFilter directive.
pub fn set_log_level(level: &str) -> Result<()> {
    match SET_LOG_LEVEL.get() {
        Some(f) => f(level),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Initializes logging to stderr. Call once at startup.
///
/// `RUST_LOG` wins over `default_level` when set. Output is colored only
/// when stderr is a terminal, so stdout stays clean for replay output.
pub fn init_logging(default_level: &str) {
    let (level_filter, level_handle) = reload::Layer::new(make_filter(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(CompactFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .try_init()
        .is_ok()
    {
        let _ = SET_LOG_LEVEL.set(Box::new(move |level_str: &str| {
            let filter = EnvFilter::try_new(level_str)
                .map_err(|e| anyhow::anyhow!("invalid log level '{level_str}': {e}"))?;
            level_handle
                .reload(filter)
                .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
        }));
    }
}
