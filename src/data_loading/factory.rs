use super::data_loader::DataLoader;
#[cfg(feature = "csv-reader")]
use super::csv_data_loader::CsvDataLoader;
use super::text_data_loader::TextDataLoader;
use crate::error::{ElasticNetError, Result};

/// Factory for creating data loaders by name
pub struct DataLoaderFactory;

impl DataLoaderFactory {
    /// Creates a loader by name ("csv" or "text")
    pub fn create(loader_type: &str) -> Result<Box<dyn DataLoader>> {
        match loader_type.to_lowercase().as_str() {
            #[cfg(feature = "csv-reader")]
            "csv" => Ok(Box::new(CsvDataLoader::new())),
            #[cfg(not(feature = "csv-reader"))]
            "csv" => Err(ElasticNetError::InvalidParameter(
                "the csv loader is not compiled in (enable the `csv-reader` feature)".to_string(),
            )),
            "text" => Ok(Box::new(TextDataLoader::new())),
            _ => Err(ElasticNetError::InvalidParameter(format!(
                "unknown loader type: {}",
                loader_type
            ))),
        }
    }

    /// Picks the fastest available loader: the csv reader when compiled in,
    /// otherwise the plain text loader.
    pub fn create_default() -> Box<dyn DataLoader> {
        #[cfg(feature = "csv-reader")]
        {
            Box::new(CsvDataLoader::new())
        }
        #[cfg(not(feature = "csv-reader"))]
        {
            log::debug!("csv reader not available, falling back to text loader");
            Box::new(TextDataLoader::new())
        }
    }

    /// Resolves an optional loader name, `None` and "auto" meaning the default.
    pub fn create_or_default(loader_type: Option<&str>) -> Result<Box<dyn DataLoader>> {
        match loader_type {
            None => Ok(Self::create_default()),
            Some(name) if name.eq_ignore_ascii_case("auto") => Ok(Self::create_default()),
            Some(name) => Self::create(name),
        }
    }

    /// Lists the loaders compiled into this build
    pub fn available_formats() -> Vec<&'static str> {
        let mut formats = Vec::new();
        if cfg!(feature = "csv-reader") {
            formats.push("csv");
        }
        formats.push("text");
        formats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_loader_is_rejected() {
        assert!(DataLoaderFactory::create("parquet").is_err());
    }

    #[test]
    fn text_loader_is_always_available() {
        let loader = DataLoaderFactory::create("TEXT").unwrap();
        assert_eq!(loader.get_name(), "Text Data Loader");
        assert!(DataLoaderFactory::available_formats().contains(&"text"));
    }

    #[cfg(feature = "csv-reader")]
    #[test]
    fn default_prefers_csv_reader() {
        assert_eq!(DataLoaderFactory::create_default().get_name(), "CSV Data Loader");
        assert_eq!(
            DataLoaderFactory::create_or_default(Some("auto")).unwrap().get_name(),
            "CSV Data Loader"
        );
    }
}
