pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::report::OutputFormat;
#[cfg(feature = "cli")]
use crate::core::{BrewRatio, ConfigProvider, RoastLevel, Unit};
#[cfg(feature = "cli")]
use clap::Parser;

/// 命令列參數；未指定的值交給 TOML 設定或預設值
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cappuccino")]
#[command(about = "Perfect ratios for the perfect cup: a cappuccino recipe calculator")]
pub struct CliConfig {
    /// Coffee bean weight in grams (values below 1 are raised to 1)
    #[arg(short, long, allow_hyphen_values = true)]
    pub bean_weight: Option<f64>,

    /// Roast level: Light, Medium, Medium-Dark, Dark, Italian
    #[arg(short, long)]
    pub roast: Option<RoastLevel>,

    /// Coffee to espresso ratio: 1.5, 2 or 2.5
    #[arg(long)]
    pub ratio: Option<BrewRatio>,

    /// Measurement unit for water and milk: ml or g
    #[arg(short, long)]
    pub unit: Option<Unit>,

    /// Path to a TOML profile
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format: text, json or csv
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Edit the recipe line by line and re-render after every change
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn bean_weight(&self) -> Option<f64> {
        self.bean_weight
    }

    fn roast_level(&self) -> Option<RoastLevel> {
        self.roast
    }

    fn ratio(&self) -> Option<BrewRatio> {
        self.ratio
    }

    fn unit(&self) -> Option<Unit> {
        self.unit
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let config = CliConfig::try_parse_from([
            "cappuccino",
            "--bean-weight",
            "20",
            "--roast",
            "medium-dark",
            "--ratio",
            "1:2.5",
            "--unit",
            "g",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.bean_weight(), Some(20.0));
        assert_eq!(config.roast_level(), Some(RoastLevel::MediumDark));
        assert_eq!(config.ratio(), Some(BrewRatio::Lighter));
        assert_eq!(config.unit(), Some(Unit::Grams));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert!(!config.interactive);
    }

    #[test]
    fn test_unset_flags_stay_empty() {
        let config = CliConfig::try_parse_from(["cappuccino"]).unwrap();
        assert_eq!(config.bean_weight(), None);
        assert_eq!(config.roast_level(), None);
        assert_eq!(config.ratio(), None);
        assert_eq!(config.unit(), None);
        assert!(config.config.is_none());
    }

    #[test]
    fn test_negative_bean_weight_is_accepted() {
        let config = CliConfig::try_parse_from(["cappuccino", "-b", "-5"]).unwrap();
        assert_eq!(config.bean_weight(), Some(-5.0));
    }

    #[test]
    fn test_rejects_unknown_ratio() {
        assert!(CliConfig::try_parse_from(["cappuccino", "--ratio", "3"]).is_err());
        assert!(CliConfig::try_parse_from(["cappuccino", "--unit", "oz"]).is_err());
    }
}
