//! Logging setup for the command-line tool.
//!
//! Lines look like `2024-01-01 12:00:00 - Processing sequencing folder: run`.

use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `<local time> - <message>`, without level, target or spans
struct LogFormat;

impl<S, N> FormatEvent<S, N> for LogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{} - ", chrono::Local::now().format(TIME_FORMAT))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Filter directive for a verbosity level. Other crates stay at `warn`.
#[must_use]
pub fn filter_directive(verbosity: Verbosity) -> String {
    format!("miseq_hashr={},warn", verbosity.as_filter())
}

/// Install the global stderr subscriber.
pub fn init(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(verbosity)))
        .with_writer(std::io::stderr)
        .event_format(LogFormat)
        .init();
}
