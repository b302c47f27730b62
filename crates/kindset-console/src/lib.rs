//! Colorful console output for kindset events.
//!
//! Provides a custom `tracing` layer that formats dispatch and collection
//! events with colors.
//!
//! ## Log Levels
//!
//! - **DEBUG**: Dispatch table setup and rejected elements
//! - **TRACE**: Individual bulk query passes

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when neither the caller nor `RUST_LOG` supplies one.
pub const DEFAULT_FILTER: &str = "kindset_core=debug";

/// Initializes console output with the default filter.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the kindset banner and sets up tracing.
pub fn init() {
    init_with(None, true);
}

/// Initializes console output with an explicit `EnvFilter` directive.
///
/// An unparsable directive falls back to [`DEFAULT_FILTER`].
pub fn init_with(filter: Option<&str>, banner: bool) {
    INIT.get_or_init(|| {
        if banner {
            print_banner();
        }

        let filter = filter
            .and_then(|directive| EnvFilter::try_new(directive).ok())
            .unwrap_or_else(|| {
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
            });

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(KindsetConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let version_line = format!("kindset v{} - closed and open dispatch", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", version_line.bright_cyan().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats kindset events with colors.
pub struct KindsetConsoleLayer;

impl<S: Subscriber> Layer<S> for KindsetConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        if !target.starts_with("kindset") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    set: Option<String>,
    kind: Option<String>,
    reason: Option<String>,
    type_name: Option<String>,
    kinds: Option<u64>,
    missing: Option<u64>,
    elements: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "kinds" => self.kinds = Some(value),
            "missing" => self.missing = Some(value),
            "elements" => self.elements = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "set" => self.set = Some(value.to_string()),
            "kind" => self.kind = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            "type_name" => self.type_name = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "dispatch_table_built" => format_table_built(v),
        "dispatch_table_rejected" => format_table_rejected(v),
        "element_rejected" => format_element_rejected(v),
        "query_pass" => format_query_pass(v),
        _ => String::new(),
    }
}

fn format_set(v: &EventVisitor) -> String {
    v.set
        .as_deref()
        .unwrap_or("?")
        .white()
        .bold()
        .to_string()
}

fn format_table_built(v: &EventVisitor) -> String {
    let kinds = v.kinds.unwrap_or(0);

    format!(
        "{} {} dispatch table │ {} kinds",
        "✓".bright_green().bold(),
        format_set(v),
        kinds.to_formatted_string(&Locale::en).bright_yellow()
    )
}

fn format_table_rejected(v: &EventVisitor) -> String {
    let detail = match v.reason.as_deref() {
        Some("ambiguous") => format!(
            "two handlers for {}",
            v.kind.as_deref().unwrap_or("?").bright_yellow()
        ),
        Some("unknown_kind") => format!(
            "handler for undeclared kind {}",
            v.type_name.as_deref().unwrap_or("?").bright_magenta()
        ),
        Some("non_exhaustive") => format!(
            "{} kinds without a handler",
            v.missing
                .unwrap_or(0)
                .to_formatted_string(&Locale::en)
                .bright_yellow()
        ),
        other => other.unwrap_or("rejected").to_string(),
    };

    format!(
        "{} {} dispatch table │ {}",
        "✗".bright_red().bold(),
        format_set(v),
        detail
    )
}

fn format_element_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} rejected │ {}",
        "✗".bright_red().bold(),
        format_set(v),
        v.type_name.as_deref().unwrap_or("?").bright_magenta()
    )
}

fn format_query_pass(v: &EventVisitor) -> String {
    let elements = v.elements.unwrap_or(0);

    format!(
        "{} {} query │ {} elements",
        "⚡".bright_cyan(),
        format_set(v),
        elements
            .to_formatted_string(&Locale::en)
            .bright_black()
    )
}
