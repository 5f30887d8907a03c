use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use arpwarden_common::config::Config;

use crate::terminal::spinner::SpinnerWriter;

/// Raw layout lines, passed through without a level symbol.
const PRINT_TARGET: &str = "arpwarden::print";
/// Completion notices, shown with a check mark instead of the info symbol.
const SUCCESS_TARGET: &str = "arpwarden::success";

/// Installs the global subscriber. `RUST_LOG` overrides the quiet level.
pub fn init(cfg: &Config) {
    let default_directives = match cfg.quiet {
        0 => "info".to_string(),
        1 => format!("warn,{PRINT_TARGET}=info,{SUCCESS_TARGET}=info"),
        _ => format!("error,{PRINT_TARGET}=info"),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(WardenFormatter)
        .with_writer(|| SpinnerWriter)
        .init();
}

pub struct WardenFormatter;

impl<S, N> FormatEvent<S, N> for WardenFormatter
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
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            if meta.target() == SUCCESS_TARGET {
                ("[✓]", |s| s.green().bold())
            } else {
                match *meta.level() {
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[+]", |s| s.green().bold()),
                    Level::WARN => ("[*]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                }
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
