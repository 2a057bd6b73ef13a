use std::sync::Arc;

use show_id_server::api::Services;
use show_id_server::config::{AppState, Config};
use show_id_server::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config path without extension, e.g. `config` for config.toml
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Create the Tokio runtime, sized by `server.workers` when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    match cfg.server.workers {
        Some(workers) => {
            runtime_builder.worker_threads(workers);
            logger::log_info(&format!("Using {workers} worker threads"));
        }
        None => logger::log_info("Using default worker threads (CPU cores)"),
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr, cfg.performance.backlog)?;

    logger::log_server_start(&addr, &cfg);

    // Services are built once and handed to the controllers that need them
    let services = Services::from_config(&cfg);
    let state = Arc::new(AppState::new(cfg, &services));

    server::start_server_loop(listener, state, server::shutdown_signal()).await?;
    Ok(())
}
