use dentbot_backend::{config::{Config, DEFAULT_LOG_FILTER}, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing(DEFAULT_LOG_FILTER)?;

    let config = Config::from_env()?;
    dentbot_backend::run(config).await?;
    Ok(())
}
