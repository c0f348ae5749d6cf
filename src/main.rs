use clap::Parser;
use small_calc::utils::error::ErrorSeverity;
use small_calc::utils::{logger, validation::Validate};
use small_calc::{CliConfig, LineConsole, MenuEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_filter.as_deref());

    tracing::info!("Starting small-calc menu");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(3);
    }

    let console = LineConsole::stdio();
    let mut engine = MenuEngine::new(console);

    if let Err(e) = engine.run() {
        tracing::error!("❌ Menu loop failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    tracing::info!("Menu loop finished");
    Ok(())
}
