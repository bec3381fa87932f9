pub mod calculator;
pub mod form;
pub mod guide;

pub use crate::domain::model::{BrewParameters, BrewRatio, RecipeOutput, RoastLevel, Unit};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
