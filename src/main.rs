// src/main.rs

use dotenvy::dotenv;
use quiz_backend::bank::{FileQuestionSource, QuestionSource};
use quiz_backend::config::Config;
use quiz_backend::routes;
use quiz_backend::state::AppState;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Load the question bank once; it is read-only for the life of the server
    let source = FileQuestionSource::from_config(&config);
    let bank = source.load().await.inspect_err(|e| {
        tracing::error!("Failed to load question bank: {}", e);
    })?;

    let summary = bank.summary();
    tracing::info!(
        "Exam '{}': {} evaluable, {} image-only, {} other",
        summary.exam,
        summary.evaluable,
        summary.image_only,
        summary.other
    );

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(bank, config);

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
