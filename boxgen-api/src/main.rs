use anyhow::Result;
use boxgen_api::{create_app, AppState, Config};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = boxgen_logging::init_subscriber();

    info!("Starting boxgen-api service...");

    let config = Config::from_env();
    info!(
        "Configuration loaded: bind_addr={}, work_dir={}",
        config.bind_addr,
        config.work_dir.display()
    );

    let state = AppState::new(&config);
    let provisioner = state.generator.provisioner();
    if !provisioner.is_available() {
        warn!(
            "{} not found on PATH; generate requests will fail at the provisioning stage",
            provisioner.name()
        );
    }

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
