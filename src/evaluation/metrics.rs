use std::collections::BTreeMap;
use std::fmt;

/// Regression metrics of one prediction, one metric map per dependent variable.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub model_name: String,
    pub targets: Vec<BTreeMap<String, f64>>,
}

impl EvaluationReport {
    pub fn new(model_name: String, n_targets: usize) -> Self {
        Self {
            model_name,
            targets: vec![BTreeMap::new(); n_targets],
        }
    }

    /// Records a metric; returns `false` when `target` is out of range.
    pub fn add_metric(&mut self, target: usize, name: &str, value: f64) -> bool {
        match self.targets.get_mut(target) {
            Some(metrics) => {
                metrics.insert(name.to_string(), value);
                true
            }
            None => false,
        }
    }

    pub fn get_metric(&self, target: usize, name: &str) -> Option<f64> {
        self.targets.get(target)?.get(name).copied()
    }

    pub fn n_targets(&self) -> usize {
        self.targets.len()
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Evaluation: {} ===", self.model_name)?;
        for (k, metrics) in self.targets.iter().enumerate() {
            let line = metrics
                .iter()
                .map(|(name, value)| format!("{}={:.6}", name, value))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "target {}: {}", k, line)?;
        }
        Ok(())
    }
}
