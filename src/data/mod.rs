//! Data module - CSV loading, cleaning and position splitting

pub mod cleaner;
pub mod columns;
pub mod loader;
pub mod positions;

pub use cleaner::DataCleaner;
pub use loader::DataLoader;
pub use positions::{Position, PositionSplitter, PositionTables};
