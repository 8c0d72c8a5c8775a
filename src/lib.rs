pub mod optional;
pub mod json;
pub mod error;


pub use optional::*;
pub use error::OptionalError;
