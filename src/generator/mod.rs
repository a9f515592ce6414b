pub mod random;
pub mod strength;
pub mod transformer;

pub use random::{RandomSource, RngSource, ScriptedRandom};
pub use strength::score;
pub use transformer::{PasswordTransformer, PASSWORD_LENGTH};
