use clap::Parser;
use parity_check::utils::logger;
use parity_check::{app, CliConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let stdout = std::io::stdout();
    if let Err(e) = app::run(&config, &mut stdout.lock()) {
        tracing::error!("❌ parity-check failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
