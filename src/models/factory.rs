use super::{ElasticNetWrapper, RegressionModel, SmartcoreElasticNetWrapper};
use crate::error::{ElasticNetError, Result};

/// Factory for creating regression engines by name
pub struct ModelFactory;

impl ModelFactory {
    /// Creates an engine by name
    pub fn create(model_type: &str) -> Result<Box<dyn RegressionModel>> {
        match model_type {
            "elastic_net" | "coordinate_descent" => Ok(Box::new(ElasticNetWrapper::new())),
            "smartcore_elastic_net" | "smartcore" => Ok(Box::new(SmartcoreElasticNetWrapper::new())),
            _ => Err(ElasticNetError::InvalidParameter(format!(
                "unknown model: {}",
                model_type
            ))),
        }
    }

    /// Lists every available engine
    pub fn available_models() -> Vec<&'static str> {
        vec!["elastic_net", "smartcore_elastic_net"]
    }

    pub fn get_model_description(model_type: &str) -> Option<&'static str> {
        match model_type {
            "elastic_net" => Some("Elastic Net solved by cyclic coordinate descent, optional intercept"),
            "smartcore_elastic_net" => Some("Elastic Net from smartcore, intercept always fitted"),
            _ => None,
        }
    }
}
