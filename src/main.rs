use anyhow::Result;
use line_scrabble::{config::Config, session::run_session, GameController};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "line_scrabble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting line scrabble...");

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let game = GameController::from_config(&config.game);
    let reader = BufReader::new(tokio::io::stdin());
    let game = run_session(reader, tokio::io::stdout(), game, &config.session).await?;

    tracing::info!("Final score: {}", game.total_score());
    Ok(())
}
