use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn load_config() -> configs::AppConfig {
    // .env first so CONFIG_PATH / SERVER_* / RUST_LOG are visible
    dotenv().ok();
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => {
            common::utils::logging::init_logging(&cfg.log.format);
            cfg
        }
        Err(e) => {
            let mut cfg = configs::from_env();
            common::utils::logging::init_logging_default();
            warn!(service = "server", event = "config_invalid", error = %e, "invalid configuration, using env/defaults");
            if let Err(e) = cfg.normalize_and_validate() {
                warn!(service = "server", event = "config_env_invalid", error = %e, "env overrides rejected, using defaults");
                cfg = configs::AppConfig::default();
            }
            cfg
        }
    }
}

fn main() -> std::process::ExitCode {
    let cfg = load_config();
    info!(service = "server", event = "logger_init", format = %cfg.log.format, "tracing subscriber initialized");

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        addr = %cfg.bind_addr(),
        "record store starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(async move {
            if let Err(e) = server::run_with_config(cfg).await {
                error!(service = "server", event = "run_failed", error = %e, "server::run_with_config returned error");
                Err(e)
            } else {
                Ok(())
            }
        });

        tokio::select! {
            res = server_task => {
                match res {
                    Ok(Ok(())) => {
                        info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
                        std::process::ExitCode::SUCCESS
                    }
                    Ok(Err(_)) => std::process::ExitCode::FAILURE,
                    Err(e) => {
                        error!(service = "server", event = "task_join_error", error = %e, "server task join error");
                        std::process::ExitCode::FAILURE
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                // state is volatile; nothing to flush
                info!(service = "server", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
