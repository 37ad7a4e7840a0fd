use clap::Parser;
use fragment_combiner::core::permutations::Permutations;
use fragment_combiner::core::ConfigProvider;
use fragment_combiner::utils::{logger, validation::Validate};
use fragment_combiner::{starting_fragments, CombinerEngine, CombinerPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-combiner")]
#[command(about = "Fragment combiner driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "combiner.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be searched without emitting words
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    if args.dry_run {
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let stdout = std::io::stdout().lock();
    let pipeline = CombinerPipeline::new(stdout, config);
    let mut engine = CombinerEngine::new_with_monitoring(pipeline, monitor_enabled);

    if let Err(e) = engine.run() {
        tracing::error!(
            "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

// 摘要寫到 stderr，stdout 只放結果
fn display_config_summary(config: &TomlConfig) {
    eprintln!("📋 Configuration Summary:");
    eprintln!(
        "  Combiner: {} v{}",
        config.combiner.name,
        config.combiner.version.as_deref().unwrap_or("-")
    );
    if let Some(description) = &config.combiner.description {
        eprintln!("  Description: {}", description);
    }
    eprintln!("  Fragments: {}", config.fragments().join(", "));
    eprintln!("  Anchor: {}", config.anchor());
    eprintln!(
        "  Fragments per word: {}..={}",
        config.min_length(),
        config.max_length()
    );
    eprintln!("  Target length: {}", config.target_length());
    eprintln!("  Strategy: {}", config.strategy());
    eprintln!("  Format: {}", config.output_format());
    eprintln!();
}

fn perform_dry_run(config: &TomlConfig) {
    eprintln!("🔍 Dry Run Analysis:");

    let starts = starting_fragments(config);
    if starts.is_empty() {
        eprintln!("  ⚠️ No fragment starts with '{}', output will be empty", config.anchor());
    } else {
        eprintln!("  Starting fragments: {}", starts.join(", "));
    }

    let n = config.fragments().len();
    let mut total: usize = 0;
    for length in config.min_length()..=config.max_length().min(n) {
        let count = Permutations::count_for(n, length);
        total = total.saturating_add(count);
        eprintln!("  {} fragments: {} permutations", length, count);
    }
    eprintln!("  Total candidates (exhaustive): {}", total);

    eprintln!();
    eprintln!("✅ Dry run analysis complete. Nothing was written to stdout.");
}
