//! Application state module

mod forms;
mod signup;

pub use forms::*;
pub use signup::*;
