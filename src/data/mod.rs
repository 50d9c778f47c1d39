//! Data module - CSV loading and the typed asset table

mod loader;
mod record;

pub use loader::{DataLoader, LoaderError};
pub use record::{AssetRecord, AssetTable};

#[cfg(test)]
pub(crate) use record::fixtures;
