use clap::Parser;
use sort_timer::config::toml_config::TomlConfig;
use sort_timer::core::policy::resolve_policies;
use sort_timer::core::ConfigProvider;
use sort_timer::utils::{logger, validation::Validate};
use sort_timer::{build_reporter, rng_from_seed, RandomPeopleSource, SortTimerEngine};

#[derive(Parser)]
#[command(name = "toml-sort-timer")]
#[command(about = "Sort timer driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "sort-timer.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override seed from config
    #[arg(long)]
    seed: Option<u64>,

    /// Dry run - show what would be sorted without generating anything
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    // 載入 TOML 配置，日誌格式取決於配置內容
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(seed) = args.seed {
        config.run.seed = Some(seed);
        tracing::info!("🔧 Seed overridden to: {}", seed);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if args.dry_run {
        perform_dry_run(&config);
        return;
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let mut rng = rng_from_seed(config.seed());
    let stdout = std::io::stdout();
    let mut sink = build_reporter(config.report_format(), stdout.lock());

    let mut engine =
        SortTimerEngine::new_with_monitoring(RandomPeopleSource::new(), config, monitor_enabled);

    if let Err(e) = engine.run(&mut rng, sink.as_mut()) {
        tracing::error!(
            "❌ Run '{}' failed: {} (Category: {:?}, Severity: {:?})",
            engine.config().run.name,
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();
    println!("📋 Run: {}", config.run.name);
    if let Some(description) = &config.run.description {
        println!("  {}", description);
    }
    println!("  Records: {} (max {})", config.record_count(), config.max_count());
    match config.seed() {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: random"),
    }

    println!();
    println!("⚙️ Sorting:");
    println!("  Algorithm: {}", config.algorithm());
    match resolve_policies(config.policies()) {
        Ok(policies) => {
            for policy in policies {
                println!("  ✅ {} ({})", policy.label(), policy.name());
            }
        }
        Err(e) => println!("  ❌ {}", e),
    }
    println!("  Preview: first {} records", config.preview_len());

    println!();
    println!("💾 Report:");
    println!("  Format: {:?}", config.report_format());
    println!("  Policy inspection: {}", config.inspect_policies());
    println!();
}
