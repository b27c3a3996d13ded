//! Fretline — guitar tutor relay server.

use std::sync::Arc;

use fretline_chat::OpenAiProvider;
use fretline_core::RelayConfig;
use fretline_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Fretline — guitar tutor relay");
    println!();
    println!("Usage: fretline [command]");
    println!();
    println!("Commands:");
    println!("  (none)      Start the server");
    println!("  check       Validate configuration and exit");
    println!("  help        Show this help message");
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY        (required) provider credential");
    println!("  PORT                  listen port (default 10000)");
    println!("  OPENAI_MODEL          model identifier (default gpt-3.5-turbo)");
    println!("  OPENAI_BASE_URL       API base (default https://api.openai.com/v1)");
    println!("  OPENAI_TIMEOUT_SECS   outbound request timeout (default 60)");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values already in the environment win over .env
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--check" | "check" => match RelayConfig::from_env() {
                Ok(config) => {
                    println!("Configuration OK");
                    println!("  port:     {}", config.port);
                    println!("  model:    {}", config.provider.model);
                    println!("  base url: {}", config.provider.base_url);
                    println!("  timeout:  {}s", config.provider.timeout.as_secs());
                    println!("  api key:  {}", config.provider.masked_key());
                    return Ok(());
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            },
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'fretline help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Refuse to serve without a credential
    let config = RelayConfig::from_env()?;

    let provider = OpenAiProvider::new(&config.provider)?;
    info!(
        "Completion provider: {} (model {})",
        config.provider.base_url,
        provider.model()
    );

    let state = Arc::new(AppState::new(Arc::new(provider)));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Fretline relay listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
