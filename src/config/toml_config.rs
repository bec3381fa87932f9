use crate::app::report::OutputFormat;
use crate::core::{BrewRatio, ConfigProvider, RoastLevel, Unit};
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::{validate_finite, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub recipe: Option<RecipeSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeSection {
    pub bean_weight: Option<f64>,
    pub roast_level: Option<RoastLevel>,
    pub ratio: Option<BrewRatio>,
    pub unit: Option<Unit>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecipeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecipeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BEAN_WEIGHT})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecipeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得輸出格式
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse)
            .transpose()
    }

    /// 取得輸出檔案路徑
    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn bean_weight(&self) -> Option<f64> {
        self.recipe.as_ref().and_then(|r| r.bean_weight)
    }

    fn roast_level(&self) -> Option<RoastLevel> {
        self.recipe.as_ref().and_then(|r| r.roast_level)
    }

    fn ratio(&self) -> Option<BrewRatio> {
        self.recipe.as_ref().and_then(|r| r.ratio)
    }

    fn unit(&self) -> Option<Unit> {
        self.recipe.as_ref().and_then(|r| r.unit)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(bean_weight) = self.bean_weight() {
            validate_finite("recipe.bean_weight", bean_weight)?;
        }

        self.output_format()?;

        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }

        Ok(())
    }
}
