#![deny(unused_crate_dependencies)]
use thiserror as _;

// Dev-dependencies used only by the library's test modules; silence the
// unused-crate lint for the binary's test build.
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use proptest as _;

use clap::Parser;
use eyre::Result;
use mockable_db::{ConnectionConfig, DbClient, NoopConnection};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Query to run against the stub connection
    #[arg(short, long, default_value = "SELECT * FROM table")]
    query: String,

    /// Number of times to run the query
    #[arg(short, long, default_value_t = 1)]
    repeat: u32,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Starting demo client");

    let cli = Cli::parse();

    let conn_string =
        dotenvy::var("DB_CONNECTION_STRING").unwrap_or_else(|_| "stub://local".to_string());
    let config = ConnectionConfig::builder()
        .conn_string(conn_string)
        .log_queries(true)
        .build()?;

    let connection = NoopConnection::with_config(config);
    let client = DbClient::new(&connection);

    client.open_connection();
    for _ in 0..cli.repeat {
        let code = client.use_connection(&cli.query);
        info!("Query returned result code {}", code);
    }
    client.close_connection();

    Ok(())
}
