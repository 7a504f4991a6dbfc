//! Colorful console output for discovery events.
//!
//! Provides a custom `tracing` layer that formats finder events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Query lifecycle (a builder frozen into a query)
//! - **DEBUG**: Rules appended, modules scanned, configuration applied
//! - **TRACE**: Individual matched types

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "typefinder_core=info,typefinder_config=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `info` level.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(FinderConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats finder events with colors.
pub struct FinderConsoleLayer;

impl<S: Subscriber> Layer<S> for FinderConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("typefinder") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    rule: Option<String>,
    module: Option<String>,
    type_name: Option<String>,
    depth: Option<u64>,
    modules: Option<u64>,
    rules: Option<u64>,
    scanned: Option<u64>,
    matched: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_text(field, s.trim_matches('"'));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "depth" => self.depth = Some(value),
            "modules" => self.modules = Some(value),
            "rules" => self.rules = Some(value),
            "scanned" => self.scanned = Some(value),
            "matched" => self.matched = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if value >= 0 {
            self.record_u64(field, value as u64);
        }
    }
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "rule" => &mut self.rule,
            "module" => &mut self.module,
            "type_name" => &mut self.type_name,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref() {
        Some("query_frozen") => format_query_frozen(v),
        Some("rule_added") => format_rule_added(v),
        Some("module_scanned") => format_module_scanned(v),
        Some("type_matched") => format!(
            "    {} {}",
            "·".bright_black(),
            v.type_name.as_deref().unwrap_or("?").white()
        ),
        Some("undefined_full_name") => format!(
            "  {} {} has no full name, treated as non-match",
            "!".yellow().bold(),
            v.type_name.as_deref().unwrap_or("?").white().bold()
        ),
        Some("config_applied") => format!(
            "  {} configuration applied │ {} rules",
            "⚙".bright_blue(),
            v.rules.unwrap_or(0).bright_yellow()
        ),
        _ if level <= Level::WARN => format!("{} unrecognized finder event", level.red()),
        _ => String::new(),
    }
}

fn format_query_frozen(v: &EventVisitor) -> String {
    format!(
        "{} Query frozen │ {} modules │ {} rules",
        "■".bright_cyan().bold(),
        v.modules.unwrap_or(0).bright_yellow(),
        v.rules.unwrap_or(0).bright_yellow()
    )
}

fn format_rule_added(v: &EventVisitor) -> String {
    format!(
        "  {} #{} {}",
        "+".bright_green(),
        v.depth.unwrap_or(0),
        v.rule.as_deref().unwrap_or("?").white().bold()
    )
}

fn format_module_scanned(v: &EventVisitor) -> String {
    let scanned = v.scanned.unwrap_or(0);
    let matched = v.matched.unwrap_or(0);
    format!(
        "  {} {} │ {}/{} matched",
        "▶".bright_blue(),
        v.module.as_deref().unwrap_or("?").white().bold(),
        matched.bright_magenta().bold(),
        scanned
    )
}
