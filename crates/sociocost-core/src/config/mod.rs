//! Model configuration.

mod model_config;

pub use model_config::ModelConfig;
