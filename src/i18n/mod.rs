//! Localization: message descriptors and catalogs

mod catalog;
pub mod messages;

pub use catalog::{Catalog, Localizer};

#[cfg(test)]
pub use catalog::MockLocalizer;
