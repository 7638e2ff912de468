//! CILC calendar - prints the configured calendar view of the session service.
//!
//! Configuration comes from `CILC__*` environment variables (see
//! [`cilc::config::AppConfig`]). The session list is fetched once; if that
//! fails the calendar is printed empty with an indicator.

use std::sync::Arc;
use tracing::info;

use cilc::adapters::{FixedClock, HttpApiClient, HttpApiConfig, SystemClock};
use cilc::application::{CalendarController, LoadSessionsHandler};
use cilc::config::{AppConfig, ClockKind, LoggingConfig};
use cilc::domain::calendar::ViewMode;
use cilc::domain::session::SessionRecord;
use cilc::ports::Clock;

fn init_tracing(logging: &LoggingConfig) {
    // Logs go to stderr so the printed calendar stays clean on stdout
    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(logging.env_filter())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(logging.env_filter())
            .init();
    }
}

fn print_session(record: &SessionRecord) {
    println!(
        "  {} | {} {} | {} | {} | {}/{} | {} | {}",
        record.title,
        record.time,
        record.timezone,
        record.instructor,
        record.location,
        record.attendees,
        record.max_attendees,
        record.session_type,
        record.status.to_string().to_uppercase(),
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging);

    info!(
        base_url = %config.api.base_url,
        view = %config.calendar.default_view,
        "CILC calendar starting..."
    );

    let clock: Arc<dyn Clock> = match config.calendar.clock {
        ClockKind::Fixed => Arc::new(FixedClock::new(config.calendar.anchor_date)),
        ClockKind::System => Arc::new(SystemClock),
    };

    let client = Arc::new(HttpApiClient::new(HttpApiConfig::from(&config.api))?);
    let load = LoadSessionsHandler::new(client).handle().await;
    let indicator = load.indicator();

    let mut calendar = CalendarController::with_state(
        config.calendar.initial_state(clock.today()),
        clock,
    );
    calendar.replace_records(load.into_records());

    let range = calendar.range();
    println!("{} ({} view)", range.label, calendar.state().view_mode);
    if let Some(indicator) = indicator {
        println!("{}", indicator);
    }

    if calendar.state().view_mode == ViewMode::Month {
        let grid = calendar.month_grid();
        for week in grid.weeks() {
            let row: Vec<String> = week
                .iter()
                .map(|cell| {
                    let marker = if cell.is_current_month { ' ' } else { '.' };
                    format!("{:>2}{}{:<2}", cell.date.format("%-d"), marker, cell.sessions.len())
                })
                .collect();
            println!("{}", row.join(" "));
        }
    }

    let visible = calendar.visible_sessions();
    if visible.is_empty() {
        println!("No sessions scheduled.");
    }
    for record in &visible {
        print_session(record);
    }

    let stats = calendar.visible_stats();
    println!(
        "{} sessions, {} attendance",
        stats.total_sessions,
        stats.attendance_rate()
    );

    Ok(())
}
