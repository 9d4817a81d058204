use anyhow::Result;
use config::Config;
use flex_power::{api, config, telemetry};
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;

    // Fail fast on a broken default scenario instead of surfacing it on the
    // first /evaluate call.
    let time = cfg.scenario.time.build()?;
    cfg.scenario.system.validate()?;
    for (kind, asset) in cfg.scenario.fleet.slots() {
        if let Some(asset) = asset {
            asset
                .validate()
                .map_err(|e| anyhow::anyhow!("{kind} slot: {e}"))?;
        }
    }
    info!(
        samples = time.len(),
        horizon_s = cfg.scenario.time.horizon_s,
        enabled_assets = cfg.scenario.fleet.enabled_count(),
        "default scenario loaded"
    );

    let app = api::router(api::AppState::new(cfg.clone()), &cfg);

    let addr = cfg.server.socket_addr()?;
    if cfg.server.host == "0.0.0.0" {
        warn!(
            "WARNING: Server binding to 0.0.0.0 - service will be accessible from network! \
            For production, bind to 127.0.0.1 unless behind a firewall/reverse proxy."
        );
    }

    info!(%addr, "starting Flex Power engine");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
