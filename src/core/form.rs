use crate::core::calculator::calculate_quantities;
use crate::core::guide::brewing_guide;
use crate::domain::model::{
    BrewParameters, BrewRatio, RecipeOutput, RoastLevel, Unit, MIN_BEAN_WEIGHT,
};
use crate::domain::ports::ConfigProvider;

/// Current state of the calculator form.
///
/// Owns the parameters and keeps the derived recipe in step with them:
/// every setter recomputes before returning.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeForm {
    params: BrewParameters,
    recipe: RecipeOutput,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self::new(BrewParameters::default())
    }
}

impl RecipeForm {
    pub fn new(params: BrewParameters) -> Self {
        let mut form = Self {
            params,
            recipe: RecipeOutput {
                water: 0.0,
                milk: 0.0,
            },
        };
        form.set_bean_weight(params.bean_weight);
        form
    }

    pub fn params(&self) -> &BrewParameters {
        &self.params
    }

    pub fn recipe(&self) -> &RecipeOutput {
        &self.recipe
    }

    pub fn guide(&self) -> Vec<String> {
        brewing_guide(&self.params, &self.recipe)
    }

    /// Clamps to [`MIN_BEAN_WEIGHT`]. NaN also lands on the floor.
    pub fn set_bean_weight(&mut self, grams: f64) {
        let clamped = grams.max(MIN_BEAN_WEIGHT);
        if clamped != grams {
            tracing::warn!(
                "Bean weight {} is below the minimum, using {}g",
                grams,
                clamped
            );
        }
        self.params.bean_weight = clamped;
        self.recalculate();
    }

    pub fn set_roast_level(&mut self, roast_level: RoastLevel) {
        self.params.roast_level = roast_level;
        // 烘焙程度不影響份量，但仍重新計算以保持一致
        self.recalculate();
    }

    pub fn set_ratio(&mut self, ratio: BrewRatio) {
        self.params.ratio = ratio;
        self.recalculate();
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.params.unit = unit;
        self.recalculate();
    }

    /// Overlay every value the source provides.
    pub fn apply<C: ConfigProvider + ?Sized>(&mut self, source: &C) {
        if let Some(grams) = source.bean_weight() {
            self.set_bean_weight(grams);
        }
        if let Some(roast_level) = source.roast_level() {
            self.set_roast_level(roast_level);
        }
        if let Some(ratio) = source.ratio() {
            self.set_ratio(ratio);
        }
        if let Some(unit) = source.unit() {
            self.set_unit(unit);
        }
    }

    fn recalculate(&mut self) {
        self.recipe = calculate_quantities(
            self.params.bean_weight,
            self.params.ratio.value(),
            self.params.unit,
        );
        tracing::debug!(
            "Recalculated: {}g beans, ratio {}, {} -> water {:.1}, milk {:.1}",
            self.params.bean_weight,
            self.params.ratio.value(),
            self.params.unit,
            self.recipe.water,
            self.recipe.milk
        );
    }
}
