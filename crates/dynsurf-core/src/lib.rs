pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{DynsurfError, Result};
pub use tolerance::Tolerance;
