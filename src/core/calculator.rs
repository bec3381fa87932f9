use crate::domain::model::{BrewParameters, RecipeOutput, Unit};

/// Steamed milk to espresso, by mass.
pub const MILK_TO_ESPRESSO: f64 = 2.5;

/// Milk density in g/ml. Espresso is taken as 1 g/ml.
pub const MILK_DENSITY: f64 = 1.03;

/// Water and milk for a shot pulled from `bean_weight` grams at `ratio`.
///
/// Total over all reals: no clamping, no validation.
pub fn calculate_quantities(bean_weight: f64, ratio: f64, unit: Unit) -> RecipeOutput {
    let espresso_yield = bean_weight * ratio;
    let milk_mass = espresso_yield * MILK_TO_ESPRESSO;

    match unit {
        Unit::Grams => RecipeOutput {
            water: espresso_yield,
            milk: milk_mass,
        },
        Unit::Milliliters => RecipeOutput {
            water: espresso_yield,
            milk: milk_mass / MILK_DENSITY,
        },
    }
}

impl BrewParameters {
    pub fn recipe(&self) -> RecipeOutput {
        calculate_quantities(self.bean_weight, self.ratio.value(), self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::BrewRatio;

    fn one_decimal(value: f64) -> String {
        format!("{:.1}", value)
    }

    #[test]
    fn test_standard_shot_in_ml() {
        let out = calculate_quantities(18.0, 2.0, Unit::Milliliters);
        assert_eq!(out.water, 36.0);
        assert_eq!(out.milk, 90.0 / 1.03);
        assert_eq!(one_decimal(out.milk), "87.4");
    }

    #[test]
    fn test_standard_shot_in_grams() {
        let out = calculate_quantities(18.0, 2.0, Unit::Grams);
        assert_eq!(out.water, 36.0);
        assert_eq!(out.milk, 90.0);
    }

    #[test]
    fn test_minimum_bean_weight() {
        let out = calculate_quantities(1.0, 1.5, Unit::Milliliters);
        assert_eq!(out.water, 1.5);
        assert_eq!(one_decimal(out.milk), "3.6");
    }

    #[test]
    fn test_milk_is_two_and_a_half_times_water_by_mass() {
        for bean_weight in [1.0, 7.25, 18.0, 22.5, 100.0] {
            for ratio in BrewRatio::ALL {
                let out = calculate_quantities(bean_weight, ratio.value(), Unit::Grams);
                assert_eq!(out.milk, out.water * 2.5);
            }
        }
    }

    #[test]
    fn test_unit_switch_only_changes_milk() {
        for ratio in BrewRatio::ALL {
            let grams = calculate_quantities(16.0, ratio.value(), Unit::Grams);
            let ml = calculate_quantities(16.0, ratio.value(), Unit::Milliliters);
            assert_eq!(ml.water, grams.water);
            assert_eq!(ml.milk, grams.milk / 1.03);
        }
    }

    #[test]
    fn test_total_over_odd_inputs() {
        let out = calculate_quantities(-4.0, 3.0, Unit::Grams);
        assert_eq!(out.water, -12.0);
        assert_eq!(out.milk, -30.0);

        let out = calculate_quantities(0.0, 2.0, Unit::Milliliters);
        assert_eq!(out.water, 0.0);
        assert_eq!(out.milk, 0.0);
    }

    #[test]
    fn test_parameters_recipe() {
        let params = BrewParameters {
            bean_weight: 20.0,
            ratio: BrewRatio::Lighter,
            unit: Unit::Grams,
            ..BrewParameters::default()
        };
        let out = params.recipe();
        assert_eq!(out.water, 50.0);
        assert_eq!(out.milk, 125.0);
    }
}
