use newscheck_rs::api::ApiServer;
use newscheck_rs::config::Config;
use newscheck_rs::logging::init_tracing;
use newscheck_rs::model::TextModel;
use newscheck_rs::scoring::ScoringPipeline;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args().nth(1);
    let config = match config_path.as_deref() {
        Some(path) => Config::from_file(path)?,
        None if Path::new("config.toml").exists() => Config::from_file("config.toml")?,
        None => Config::default(),
    };
    config.validate()?;

    // Initialize logging
    init_tracing(&config.logging);

    info!("Starting newscheck-rs v{}", env!("CARGO_PKG_VERSION"));
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Model: {}", config.model.model_path);
    info!("  Vectorizer: {}", config.model.vectorizer_path);

    // Artifacts are required; refuse to start without them
    let model = TextModel::load(&config.model.model_path, &config.model.vectorizer_path)?;
    let pipeline = ScoringPipeline::new(Arc::new(model));

    let server = ApiServer::new(
        pipeline,
        config.server.listen_addr.clone(),
        config.server.max_upload_size,
    );
    server.run().await?;

    Ok(())
}
