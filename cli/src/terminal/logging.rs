use colored::*;
use netmap_common::config::Config;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `-q` raises the level to warnings only. Terminal
/// output from the `print` module is never filtered.
pub fn init(cfg: &Config) {
    let level = match cfg.quiet {
        0 => "info",
        _ => "warn",
    };
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if let Ok(directive) = format!("{PRINT_TARGET}=info").parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(NetmapFormatter)
        .init();
}

pub struct NetmapFormatter;

impl<S, N> FormatEvent<S, N> for NetmapFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the preformatted line out of a `print` event.
#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = format!("{value:?}");
        }
    }
}
