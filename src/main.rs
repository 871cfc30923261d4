//! Recordings - connects to the catalogue database and runs the walkthrough.
//!
//! Credentials come from `DBUSER` and `DBPASS`; the server is expected at
//! `localhost:3306` with a `recordings` database. Any failure is fatal and
//! exits with status 1.

mod output;

use miette::Diagnostic;
use tracing::warn;

use recordings::demo;
use recordings::logging;
use recordings::{MysqlAlbumStore, MysqlConfig, StoreError, StoreResult};

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        report(&e);
        std::process::exit(1);
    }
}

async fn run() -> StoreResult<()> {
    output::header("Working with databases");

    let store = MysqlAlbumStore::connect(MysqlConfig::from_env()).await?;
    output::success("Database connected");

    demo::run(&store, |step| output::result(&step.to_string())).await?;

    if let Err(e) = store.close().await {
        warn!(error = %e, "Failed to close MySQL connection");
    }
    Ok(())
}

fn report(err: &StoreError) {
    output::error(&headline(err));
    if let Some(help) = err.help() {
        output::hint(&help.to_string());
    }
}

/// One-line summary: code, kind of failure, then the full message.
fn headline(err: &StoreError) -> String {
    let code = err.code();
    format!("[{}] {}: {}", code, code.description(), err)
}
