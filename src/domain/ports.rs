use crate::domain::model::{BrewRatio, RoastLevel, Unit};
use crate::utils::error::Result;

/// Where rendered reports end up.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// A source of form values. Every value is optional so sources can be
/// layered; an absent value leaves the form untouched.
pub trait ConfigProvider {
    fn bean_weight(&self) -> Option<f64>;
    fn roast_level(&self) -> Option<RoastLevel>;
    fn ratio(&self) -> Option<BrewRatio>;
    fn unit(&self) -> Option<Unit>;
}
