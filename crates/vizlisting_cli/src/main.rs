//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `vizlisting_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use vizlisting_core::db::open_db_in_memory;
use vizlisting_core::{ListingService, SqliteListingRepository};

fn main() {
    println!("vizlisting_core version={}", vizlisting_core::core_version());

    // Tiny in-memory scenario to validate core wiring end to end.
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };

    let outcome = SqliteListingRepository::try_new(&conn)
        .map(ListingService::new)
        .and_then(|service| {
            service.create_markdown_visualization("Hello World")?;
            let total = service.count_visualizations()?;
            let matched = service.search_visualizations("wor")?.len();
            Ok((total, matched))
        });

    match outcome {
        Ok((total, matched)) => {
            println!("vizlisting_core smoke count={total} search_wor={matched}");
        }
        Err(err) => {
            eprintln!("smoke scenario failed: {err}");
            std::process::exit(1);
        }
    }
}
