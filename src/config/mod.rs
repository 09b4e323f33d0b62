//! Configuration module

mod catalog;

pub use catalog::CatalogConfig;
pub use catalog::CategoryConfig;
pub use catalog::PlayerConfig;
