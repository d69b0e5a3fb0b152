use clap::Parser;
use geo_cascade::app::commands::{self, Outcome};
use geo_cascade::utils::error::{ErrorSeverity, GeoError};
use geo_cascade::utils::{logger, validation::Validate};
use geo_cascade::{CliConfig, GeoConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 載入配置
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match GeoConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => fail(&e),
            }
        }
        None => GeoConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => fail(&e),
    };

    let stdout = std::io::stdout();
    match commands::run(&cli.command, &catalog, &config, stdout.lock()) {
        Ok(Outcome::Success) => Ok(()),
        Ok(Outcome::Rejected) => std::process::exit(1),
        Err(e) => fail(&e),
    }
}

fn fail(e: &GeoError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 1,
        ErrorSeverity::High => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
