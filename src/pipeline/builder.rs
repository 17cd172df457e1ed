use super::trainer::Trainer;
use crate::error::{ElasticNetError, Result};
use crate::models::factory::ModelFactory;

/// Builder for configuring a [`Trainer`]
pub struct TrainerBuilder {
    model_type: Option<String>,
    model_params: Vec<(String, String)>,
    intercept_flag: bool,
}

impl TrainerBuilder {
    pub fn new() -> Self {
        Self {
            model_type: None,
            model_params: Vec::new(),
            intercept_flag: true,
        }
    }

    /// Sets the engine
    pub fn model(mut self, model_type: &str) -> Self {
        self.model_type = Some(model_type.to_string());
        self
    }

    /// Sets an engine parameter; later values for the same key win
    pub fn model_param(mut self, key: &str, value: &str) -> Self {
        self.model_params.push((key.to_string(), value.to_string()));
        self
    }

    /// Whether to fit an intercept term
    pub fn intercept(mut self, intercept_flag: bool) -> Self {
        self.intercept_flag = intercept_flag;
        self
    }

    /// Creates the trainer, validating the model name and every parameter
    pub fn build(self) -> Result<Trainer> {
        let model_type = self
            .model_type
            .ok_or_else(|| ElasticNetError::InvalidParameter("model must be set".to_string()))?;

        // dry run against a fresh engine so bad configuration fails here
        let mut probe = ModelFactory::create(&model_type)?;
        for (key, value) in &self.model_params {
            if key == "intercept" {
                return Err(ElasticNetError::InvalidParameter(
                    "set the intercept with TrainerBuilder::intercept".to_string(),
                ));
            }
            probe.set_param(key, value)?;
        }
        probe.set_param("intercept", &self.intercept_flag.to_string())?;

        Ok(Trainer::new(model_type, self.model_params, self.intercept_flag))
    }
}

impl Default for TrainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_is_required() {
        assert!(TrainerBuilder::new().build().is_err());
    }

    #[test]
    fn unknown_model_and_parameter_fail_at_build() {
        assert!(TrainerBuilder::new().model("lasso_path").build().is_err());
        assert!(TrainerBuilder::new()
            .model("elastic_net")
            .model_param("depth", "3")
            .build()
            .is_err());
        assert!(TrainerBuilder::new()
            .model("elastic_net")
            .model_param("intercept", "false")
            .build()
            .is_err());
    }

    #[test]
    fn smartcore_engine_requires_intercept() {
        assert!(TrainerBuilder::new()
            .model("smartcore_elastic_net")
            .intercept(false)
            .build()
            .is_err());
    }

    #[test]
    fn valid_configuration_builds() {
        let trainer = TrainerBuilder::new()
            .model("elastic_net")
            .model_param("alpha", "0.1")
            .model_param("l1_ratio", "0.9")
            .intercept(false)
            .build()
            .unwrap();
        assert_eq!(trainer.model_type(), "elastic_net");
        assert!(!trainer.intercept_flag());
    }
}
