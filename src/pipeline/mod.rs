pub mod builder;
pub mod trainer;
pub mod predictor;
pub mod driver;

pub use builder::TrainerBuilder;
pub use trainer::{Model, Trainer};
pub use predictor::Predictor;
pub use driver::{BatchDriver, RunOutput};
