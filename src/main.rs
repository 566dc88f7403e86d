use std::sync::Arc;

use tokio::sync::Notify;

mod ajax;
mod api;
mod config;
mod error;
mod http;
mod logger;
mod pages;
mod server;

use pages::{PageStore, TomlPageStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // First argument: config file base name (extension optional)
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Create Tokio runtime, sized by `server.workers` when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        logger::log_info(&format!("Using {workers} worker threads"));
    } else {
        logger::log_info("Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let store = load_page_store(&cfg)?;
    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(config::AppState::new(
        cfg,
        Arc::new(logger::ChannelLogger),
        store,
    ));

    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown))?;
    server::run_server_loop(listener, state, shutdown).await;

    logger::log_info("Server stopped");
    Ok(())
}

/// Page store for the page fields endpoint; empty when the endpoint is off
fn load_page_store(cfg: &config::Config) -> Result<Arc<dyn PageStore>, Box<dyn std::error::Error>> {
    if !cfg.pages.enabled {
        return Ok(Arc::new(TomlPageStore::default()));
    }

    let Some(path) = cfg.pages.file.as_deref() else {
        logger::log_warning("pages.enabled is set without pages.file; every lookup will 404");
        return Ok(Arc::new(TomlPageStore::default()));
    };

    let store = TomlPageStore::from_file(path)?;
    logger::log_info(&format!("Loaded {} page(s) from {path}", store.page_count()));
    Ok(Arc::new(store))
}
