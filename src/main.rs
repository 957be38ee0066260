use anyhow::Context;
use cfunctions::utils::error::ErrorSeverity;
use cfunctions::utils::{logger, validation::Validate};
use cfunctions::{CliConfig, Driver, FileConfig, FixtureError};
use clap::Parser;
use std::io::{BufWriter, Write};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 載入設定檔（若有指定）
    let file_config = match &args.config {
        Some(path) => match FileConfig::from_file(path).and_then(|config| {
            config.validate()?;
            Ok(config)
        }) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(exit_code(&e));
            }
        },
        None => FileConfig::default(),
    };

    // 初始化日誌
    logger::init_cli_logger(args.verbose, file_config.log_filter(), file_config.log_json());

    tracing::info!("Starting cfunctions");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let config = args.resolve(&file_config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match Driver::new(config).run(&mut out) {
        Ok(summary) => {
            tracing::info!(
                "✅ Done: {} iterations, last counter {:?}",
                summary.iterations,
                summary.last_counter
            );
        }
        Err(e) => {
            let code = exit_code(&e);
            if code == 0 {
                // 輸出端提前關閉（例如 `| head`），不算失敗
                tracing::warn!("⚠️ Output closed early: {}", e);
                return Ok(());
            }

            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(code);
        }
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(e: &FixtureError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
