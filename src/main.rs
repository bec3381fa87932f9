use anyhow::Context;
use cappuccino_calc::core::Storage;
use cappuccino_calc::utils::error::ErrorSeverity;
use cappuccino_calc::utils::{logger, validation::Validate};
use cappuccino_calc::{
    render, CliConfig, LocalStorage, RecipeError, RecipeForm, Session, TomlConfig,
};
use clap::Parser;
use std::io::Write;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("☕ Starting cappuccino calculator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(Some(report)) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .context("Failed to write the recipe to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(
                "❌ Recipe failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            std::process::exit(exit_code);
        }
    }

    Ok(())
}

/// Returns the report to print, or `None` when it was saved or the session
/// already wrote everything.
fn run(config: &CliConfig) -> Result<Option<String>, RecipeError> {
    let mut form = RecipeForm::default();

    // 載入 TOML 配置
    let profile = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading profile from: {}", path);
            let profile = TomlConfig::from_file(path)?;
            profile.validate()?;
            form.apply(&profile);
            Some((path.as_str(), profile))
        }
        None => None,
    };

    // 命令列覆蓋設定
    form.apply(config);

    let profile_format = match &profile {
        Some((_, profile)) => profile.output_format()?,
        None => None,
    };
    let format = config.format.or(profile_format).unwrap_or_default();

    if config.interactive {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        Session::new(form, format, stdout.lock()).run(stdin.lock())?;
        return Ok(None);
    }

    let report = render(&form, format)?;

    // 命令列路徑相對於工作目錄，設定檔中的路徑相對於設定檔所在目錄
    let target = match (&config.output, &profile) {
        (Some(path), _) => Some((LocalStorage::new("."), path.clone())),
        (None, Some((profile_path, profile))) => profile.output_path().map(|path| {
            let base = Path::new(profile_path)
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            (LocalStorage::new(base), path.to_string())
        }),
        (None, None) => None,
    };

    match target {
        Some((storage, path)) => {
            storage.write_file(&path, report.as_bytes())?;
            tracing::info!("📁 Recipe saved to: {}", storage.resolve(&path).display());
            Ok(None)
        }
        None => Ok(Some(report)),
    }
}
