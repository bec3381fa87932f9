pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::report::{render, OutputFormat, RecipeReport};
pub use app::session::Session;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::calculator::calculate_quantities;
pub use core::form::RecipeForm;
pub use core::guide::brewing_guide;
pub use domain::model::{BrewParameters, BrewRatio, RecipeOutput, RoastLevel, Unit};
pub use utils::error::{RecipeError, Result};
