pub mod answers;
pub mod result;

pub use answers::{Field, TriviaAnswers};
pub use result::{Strength, TransformationResult};
