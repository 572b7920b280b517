use clap::Parser;
use sort_timer::core::ConfigProvider;
use sort_timer::utils::{logger, validation::Validate};
use sort_timer::{build_reporter, rng_from_seed, CliConfig, RandomPeopleSource, SortTimerEngine};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sort-timer");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let mut rng = rng_from_seed(config.seed());
    let stdout = std::io::stdout();
    let mut sink = build_reporter(config.report_format(), stdout.lock());

    let mut engine =
        SortTimerEngine::new_with_monitoring(RandomPeopleSource::new(), config, monitor_enabled);

    match engine.run(&mut rng, sink.as_mut()) {
        Ok(report) => {
            tracing::info!(
                "✅ Sorted {} records under {} policies",
                report.generated_count,
                report.sorts.len()
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            std::process::exit(e.severity().exit_code());
        }
    }
}
