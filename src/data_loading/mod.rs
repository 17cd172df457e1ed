pub mod data_loader; // Strategy trait
#[cfg(feature = "csv-reader")]
pub mod csv_data_loader; // csv crate implementation of strategy
pub mod text_data_loader; // plain text implementation of strategy
pub mod factory; // Factory for loaders

pub use data_loader::{ColumnSelection, DataLoader};
#[cfg(feature = "csv-reader")]
pub use csv_data_loader::CsvDataLoader;
pub use text_data_loader::TextDataLoader;
pub use factory::DataLoaderFactory;
