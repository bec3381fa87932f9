use crate::utils::error::{RecipeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RecipeError::invalid_input(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(RecipeError::invalid_input(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RecipeError::invalid_input(
            field_name,
            &value.to_string(),
            "Value must be a finite number",
        ));
    }
    Ok(())
}

/// 解析數字欄位，保留原始字串以便錯誤訊息
pub fn parse_number(field_name: &str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|e| {
        RecipeError::invalid_input(field_name, raw, format!("Not a number ({})", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "./recipe.json").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "   ").is_err());
        assert!(validate_path("output.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("recipe.bean_weight", 18.0).is_ok());
        assert!(validate_finite("recipe.bean_weight", -3.0).is_ok());
        assert!(validate_finite("recipe.bean_weight", f64::NAN).is_err());
        assert!(validate_finite("recipe.bean_weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("bean weight", " 18.5 ").unwrap(), 18.5);
        assert!(parse_number("bean weight", "eighteen").is_err());
    }
}
