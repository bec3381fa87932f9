use crate::utils::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 烘焙程度，只用於顯示，不影響計算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RoastLevel {
    Light,
    #[default]
    Medium,
    #[serde(rename = "Medium-Dark")]
    MediumDark,
    Dark,
    Italian,
}

impl RoastLevel {
    pub const ALL: [RoastLevel; 5] = [
        RoastLevel::Light,
        RoastLevel::Medium,
        RoastLevel::MediumDark,
        RoastLevel::Dark,
        RoastLevel::Italian,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoastLevel::Light => "Light",
            RoastLevel::Medium => "Medium",
            RoastLevel::MediumDark => "Medium-Dark",
            RoastLevel::Dark => "Dark",
            RoastLevel::Italian => "Italian",
        }
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoastLevel {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "light" => Ok(RoastLevel::Light),
            "medium" => Ok(RoastLevel::Medium),
            "mediumdark" => Ok(RoastLevel::MediumDark),
            "dark" => Ok(RoastLevel::Dark),
            "italian" => Ok(RoastLevel::Italian),
            _ => Err(RecipeError::invalid_input(
                "roast level",
                s,
                "Expected one of: Light, Medium, Medium-Dark, Dark, Italian",
            )),
        }
    }
}

/// Measurement unit for the water and milk quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "g")]
    Grams,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Milliliters => "ml",
            Unit::Grams => "g",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Milliliters => "Milliliters (ml)",
            Unit::Grams => "Grams (g)",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Ok(Unit::Milliliters)
            }
            "g" | "gram" | "grams" => Ok(Unit::Grams),
            _ => Err(RecipeError::invalid_input(
                "unit",
                s,
                "Expected one of: ml, g",
            )),
        }
    }
}

/// Coffee to espresso ratio. Only the three offered strengths are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrewRatio {
    Stronger,
    #[default]
    Standard,
    Lighter,
}

impl BrewRatio {
    pub const ALL: [BrewRatio; 3] = [BrewRatio::Stronger, BrewRatio::Standard, BrewRatio::Lighter];

    pub fn value(&self) -> f64 {
        match self {
            BrewRatio::Stronger => 1.5,
            BrewRatio::Standard => 2.0,
            BrewRatio::Lighter => 2.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BrewRatio::Stronger => "1:1.5 (Stronger)",
            BrewRatio::Standard => "1:2 (Standard)",
            BrewRatio::Lighter => "1:2.5 (Lighter)",
        }
    }

    pub fn from_value(value: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.value() == value)
            .ok_or_else(|| {
                RecipeError::invalid_input(
                    "ratio",
                    &value.to_string(),
                    "Expected one of: 1.5, 2, 2.5",
                )
            })
    }
}

impl fmt::Display for BrewRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BrewRatio {
    type Err = RecipeError;

    /// 接受 `2`、`2.5`、`1:2.5` 等寫法
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let raw = trimmed.strip_prefix("1:").unwrap_or(trimmed);
        let value = raw.trim().parse::<f64>().map_err(|_| {
            RecipeError::invalid_input("ratio", s, "Expected one of: 1.5, 2, 2.5")
        })?;
        Self::from_value(value)
    }
}

// 反序列化沿用 FromStr，設定檔與命令列接受相同寫法
impl<'de> Deserialize<'de> for RoastLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for BrewRatio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for BrewRatio {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        BrewRatio::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrewParameters {
    /// Dry coffee in grams. Kept at or above [`MIN_BEAN_WEIGHT`] by the form.
    pub bean_weight: f64,
    pub ratio: BrewRatio,
    pub unit: Unit,
    pub roast_level: RoastLevel,
}

pub const MIN_BEAN_WEIGHT: f64 = 1.0;
pub const DEFAULT_BEAN_WEIGHT: f64 = 18.0;

impl Default for BrewParameters {
    fn default() -> Self {
        Self {
            bean_weight: DEFAULT_BEAN_WEIGHT,
            ratio: BrewRatio::default(),
            unit: Unit::default(),
            roast_level: RoastLevel::default(),
        }
    }
}

/// Water and milk quantities, expressed in the unit they were requested in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeOutput {
    pub water: f64,
    pub milk: f64,
}
