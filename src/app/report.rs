use crate::core::form::RecipeForm;
use crate::core::guide::{format_one_decimal, format_quantity};
use crate::domain::model::{BrewParameters, RecipeOutput};
use crate::utils::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(RecipeError::invalid_input(
                "output format",
                s,
                "Expected one of: text, json, csv",
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormattedQuantities {
    pub water: String,
    pub milk: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeQuantities {
    pub water: f64,
    pub milk: f64,
    pub unit: &'static str,
}

/// Everything the form shows, in one serializable snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeReport {
    pub parameters: BrewParameters,
    pub recipe: RecipeQuantities,
    pub formatted: FormattedQuantities,
    pub guide: Vec<String>,
}

impl RecipeReport {
    pub fn from_form(form: &RecipeForm) -> Self {
        let params = *form.params();
        let RecipeOutput { water, milk } = *form.recipe();
        let unit = params.unit.symbol();

        Self {
            parameters: params,
            recipe: RecipeQuantities { water, milk, unit },
            formatted: FormattedQuantities {
                water: format_quantity(water, unit),
                milk: format_quantity(milk, unit),
            },
            guide: form.guide(),
        }
    }
}

#[derive(Debug, Serialize)]
struct QuantityRow {
    item: &'static str,
    amount: String,
    unit: &'static str,
}

pub fn render(form: &RecipeForm, format: OutputFormat) -> Result<String> {
    let report = RecipeReport::from_form(form);
    tracing::debug!("Rendering report as {}", format);

    match format {
        OutputFormat::Text => Ok(render_text(&report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)? + "\n"),
        OutputFormat::Csv => render_csv(&report),
    }
}

fn render_text(report: &RecipeReport) -> String {
    let params = &report.parameters;
    let mut lines = vec![
        "Cappuccino Calculator".to_string(),
        "Perfect ratios for the perfect cup".to_string(),
        String::new(),
        format!("Coffee Bean Weight: {}", format_quantity(params.bean_weight, "g")),
        format!("Roast Level:        {}", params.roast_level),
        format!("Ratio:              {}", params.ratio),
        format!("Measurement Unit:   {}", params.unit.label()),
        String::new(),
        "Your Recipe".to_string(),
        format!("  Water: {}", report.formatted.water),
        format!("  Milk: {}", report.formatted.milk),
        String::new(),
        "Brewing Guide".to_string(),
    ];
    lines.extend(
        report
            .guide
            .iter()
            .enumerate()
            .map(|(index, step)| format!("  {}. {}", index + 1, step)),
    );

    lines.join("\n") + "\n"
}

fn render_csv(report: &RecipeReport) -> Result<String> {
    let params = &report.parameters;
    let unit = report.recipe.unit;
    let rows = [
        QuantityRow {
            item: "coffee",
            amount: format_one_decimal(params.bean_weight),
            unit: "g",
        },
        QuantityRow {
            item: "water",
            amount: format_one_decimal(report.recipe.water),
            unit,
        },
        QuantityRow {
            item: "milk",
            amount: format_one_decimal(report.recipe.milk),
            unit,
        },
    ];

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| RecipeError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| {
        RecipeError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Unit;

    #[test]
    fn test_text_report() {
        let text = render(&RecipeForm::default(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Cappuccino Calculator\n"));
        assert!(text.contains("Roast Level:        Medium\n"));
        assert!(text.contains("Ratio:              1:2 (Standard)\n"));
        assert!(text.contains("Measurement Unit:   Milliliters (ml)\n"));
        assert!(text.contains("  Water: 36.0ml\n"));
        assert!(text.contains("  Milk: 87.4ml\n"));
        assert!(text.contains("  3. Add 18.0g of ground coffee to the portafilter\n"));
        assert!(text.contains("  9. Combine espresso"));
    }

    #[test]
    fn test_json_report() {
        let mut form = RecipeForm::default();
        form.set_unit(Unit::Grams);
        let json = render(&form, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["parameters"]["bean_weight"], 18.0);
        assert_eq!(value["parameters"]["ratio"], 2.0);
        assert_eq!(value["parameters"]["unit"], "g");
        assert_eq!(value["parameters"]["roast_level"], "Medium");
        assert_eq!(value["recipe"]["water"], 36.0);
        assert_eq!(value["recipe"]["milk"], 90.0);
        assert_eq!(value["formatted"]["milk"], "90.0g");
        assert_eq!(value["guide"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_csv_report() {
        let csv = render(&RecipeForm::default(), OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "item,amount,unit\ncoffee,18.0,g\nwater,36.0,ml\nmilk,87.4,ml\n"
        );
    }

    #[test]
    fn test_ties_round_up_in_every_format() {
        let mut form = RecipeForm::default();
        form.set_bean_weight(14.25);
        let text = render(&form, OutputFormat::Text).unwrap();
        assert!(text.contains("Coffee Bean Weight: 14.3g\n"));

        form.set_bean_weight(1.125);
        form.set_unit(Unit::Grams);
        let csv = render(&form, OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "item,amount,unit\ncoffee,1.1,g\nwater,2.3,g\nmilk,5.6,g\n"
        );

        let json = render(&form, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["formatted"]["water"], "2.3g");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
