use clap::Parser;
use grade_report::utils::{logger, validation::Validate};
use grade_report::{CliConfig, EtlEngine, GradeError, GradePipeline};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    if config.monitor {
        tracing::info!("System monitoring enabled");
    }

    let monitor_enabled = config.monitor;
    let pipeline = GradePipeline::new(config, std::io::stdout().lock());
    let mut engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    if let Err(e) = engine.run() {
        fail(e);
    }
}

fn fail(e: GradeError) -> ! {
    tracing::debug!("Grade report failed: {} (Category: {:?})", e, e.category());
    tracing::debug!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
