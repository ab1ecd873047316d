//! Prints a browsing history page as text rows.
//!
//! Run with:
//! ```sh
//! RUST_LOG=browser_widgets=debug cargo run -p browser-widgets --example history_list
//! ```

use std::sync::Arc;

use browser_widgets::prelude::*;
use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

struct Visit {
    id: u64,
    title: &'static str,
    url: &'static str,
    visited_at_ms: i64,
}

impl TimedItem for Visit {
    fn timestamp(&self) -> i64 {
        self.visited_at_ms
    }

    fn stable_id(&self) -> u64 {
        self.id
    }
}

fn main() -> browser_widgets::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let now = Utc::now();
    let ago = |hours: i64| (now - Duration::hours(hours)).timestamp_millis();

    let config = DateDividedConfig::new()
        .with_day_boundary(DayBoundary::UTC)
        .with_order(GroupOrder::NewestFirst);
    let mut history = DateDividedModel::with_config(config)?;
    history.set_headers([HeaderKind::Standard]);
    history.set_footer(true);

    history.signals().rows_removed.connect(|(first, last)| {
        tracing::info!(first, last, "rows removed");
    });

    history.load_items([
        Arc::new(Visit { id: 1, title: "The Rust Book", url: "doc.rust-lang.org/book", visited_at_ms: ago(1) }),
        Arc::new(Visit { id: 2, title: "crates.io", url: "crates.io", visited_at_ms: ago(3) }),
        Arc::new(Visit { id: 3, title: "This Week in Rust", url: "this-week-in-rust.org", visited_at_ms: ago(26) }),
        Arc::new(Visit { id: 4, title: "docs.rs: chrono", url: "docs.rs/chrono", visited_at_ms: ago(75) }),
    ]);

    let today = now.date_naive();
    let mut renderer = TextRowRenderer::new(today, |v: &Visit| format!("{} ({})", v.title, v.url));

    println!("-- {} rows --", history.row_count());
    for row in history.render_rows(&mut renderer)? {
        println!("{row}");
    }

    let removed = history.remove_by_id(4)?;
    println!("\nremoved '{}'", removed.title);
    for row in history.render_rows(&mut renderer)? {
        println!("{row}");
    }

    Ok(())
}
