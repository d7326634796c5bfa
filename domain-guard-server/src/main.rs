use color_eyre::eyre::Result;
use domain_guard::{ServiceSettings, router_from_settings, serve};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = ServiceSettings::load()?;

    if settings.admin.token.is_none() {
        tracing::warn!("No admin token configured, the settings page is unreachable");
    }

    let router = router_from_settings(&settings).await?;

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!(backend = ?settings.storage.backend, "Starting domain guard service");

    serve(listener, router).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
