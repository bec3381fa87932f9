use crate::domain::model::{BrewParameters, RecipeOutput};

pub const GUIDE_STEPS: usize = 9;

/// One decimal place, exact ties rounded away from zero (`14.25` -> `14.3`).
///
/// `{:.1}` alone sends exact ties to the even digit. Only odd multiples of
/// 0.25 can sit exactly on a tie; every other value formats as-is.
pub fn format_one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (value * 10.0).round() / 10.0);
    }
    format!("{:.1}", value)
}

/// One decimal followed by the unit symbol, e.g. `87.4ml`.
pub fn format_quantity(value: f64, unit: &str) -> String {
    format!("{}{}", format_one_decimal(value), unit)
}

/// The nine brewing steps for the given parameters and their recipe.
pub fn brewing_guide(params: &BrewParameters, recipe: &RecipeOutput) -> Vec<String> {
    let unit = params.unit.symbol();

    vec![
        "Grind your coffee beans to a fine espresso grind".to_string(),
        "Heat your machine and portafilter".to_string(),
        format!(
            "Add {} of ground coffee to the portafilter",
            format_quantity(params.bean_weight, "g")
        ),
        "Tamp the grounds evenly with about 30 pounds of pressure".to_string(),
        format!(
            "Extract {} of espresso (25-30 seconds)",
            format_quantity(recipe.water, unit)
        ),
        "While extracting, steam your milk".to_string(),
        format!(
            "Pour {} cold milk into a pitcher",
            format_quantity(recipe.milk, unit)
        ),
        "Steam until silky microfoam forms (60-65°C)".to_string(),
        "Combine espresso and steamed milk with a 1cm layer of foam".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BrewRatio, Unit};

    #[test]
    fn test_guide_has_nine_steps() {
        let params = BrewParameters::default();
        let guide = brewing_guide(&params, &params.recipe());
        assert_eq!(guide.len(), GUIDE_STEPS);
        assert_eq!(guide[0], "Grind your coffee beans to a fine espresso grind");
        assert_eq!(
            guide[8],
            "Combine espresso and steamed milk with a 1cm layer of foam"
        );
    }

    #[test]
    fn test_guide_embeds_quantities() {
        let params = BrewParameters::default();
        let guide = brewing_guide(&params, &params.recipe());
        assert_eq!(guide[2], "Add 18.0g of ground coffee to the portafilter");
        assert_eq!(guide[4], "Extract 36.0ml of espresso (25-30 seconds)");
        assert_eq!(guide[6], "Pour 87.4ml cold milk into a pitcher");
    }

    #[test]
    fn test_guide_follows_unit() {
        let params = BrewParameters {
            bean_weight: 1.0,
            ratio: BrewRatio::Stronger,
            unit: Unit::Grams,
            ..BrewParameters::default()
        };
        let guide = brewing_guide(&params, &params.recipe());
        assert_eq!(guide[2], "Add 1.0g of ground coffee to the portafilter");
        assert_eq!(guide[4], "Extract 1.5g of espresso (25-30 seconds)");
        assert_eq!(guide[6], "Pour 3.8g cold milk into a pitcher");
    }

    #[test]
    fn test_guide_rounds_ties_up() {
        let params = BrewParameters {
            bean_weight: 1.125,
            ratio: BrewRatio::Standard,
            unit: Unit::Grams,
            ..BrewParameters::default()
        };
        let guide = brewing_guide(&params, &params.recipe());
        assert_eq!(guide[2], "Add 1.1g of ground coffee to the portafilter");
        assert_eq!(guide[4], "Extract 2.3g of espresso (25-30 seconds)");
        assert_eq!(guide[6], "Pour 5.6g cold milk into a pitcher");
    }

    #[test]
    fn test_format_one_decimal() {
        assert_eq!(format_one_decimal(14.25), "14.3");
        assert_eq!(format_one_decimal(2.25), "2.3");
        assert_eq!(format_one_decimal(0.75), "0.8");
        assert_eq!(format_one_decimal(-0.25), "-0.3");
        assert_eq!(format_one_decimal(2.5), "2.5");
        // 0.15 的二進位值略小於 0.15，不是平手
        assert_eq!(format_one_decimal(0.15), "0.1");
        assert_eq!(format_one_decimal(87.378_640_776), "87.4");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(87.378_640_776, "ml"), "87.4ml");
        assert_eq!(format_quantity(36.0, "g"), "36.0g");
    }
}
