/**
 * Login Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the listen address and serves
 * `/api/login` and `/api/health` until Ctrl-C.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use travel_auth::backend::server::{run, ServerConfig};

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    tracing::debug!("Loaded server config: {:?}", config);

    run(&config).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin travel-auth-server --features ssr");
    std::process::exit(1);
}
