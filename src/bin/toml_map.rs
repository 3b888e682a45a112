use clap::Parser;
use quake_map::core::ConfigProvider;
use quake_map::utils::{logger, validation::Validate};
use quake_map::{LocalStorage, MapEngine, QuakeMapPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-map")]
#[command(about = "Build the earthquake map from a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "map-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the tectonic boundary setting from config
    #[arg(long)]
    plates: Option<bool>,

    /// Show what would be fetched and written without doing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based map build");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(plates) = args.plates {
        config.source.include_boundaries = plates;
        tracing::info!("🔧 Tectonic boundaries overridden to: {}", plates);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be fetched or written");
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = QuakeMapPipeline::new(storage, config);
    let engine = MapEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Map built successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Map build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn display_config_summary(config: &TomlConfig) {
    let settings = config.map_settings();
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Earthquakes: {}", config.earthquake_endpoint());
    match config.boundary_endpoint() {
        Some(url) => tracing::info!("  Plate boundaries: {}", url),
        None => tracing::info!("  Plate boundaries: disabled"),
    }
    tracing::info!(
        "  View: center {:?}, zoom {}",
        settings.center,
        settings.zoom
    );
    tracing::info!(
        "  Output: {} ({})",
        config.output_path(),
        config.output_formats().join(", ")
    );
}
