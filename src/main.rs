//! emstrack main entrypoint.

use emstrack::run;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "emstrack=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
