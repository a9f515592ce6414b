pub mod cli;
pub mod error;
pub mod generator;
pub mod logging;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
pub use generator::{PasswordTransformer, RandomSource};
pub use models::{TransformationResult, TriviaAnswers};
