//! Form domain layer
//!
//! Field specs, validation rules and the form model that owns values and
//! errors. Nothing here knows about rendering or about the signup form.

mod field;
mod form_model;
pub mod password;
mod rules;

pub use field::{FieldOption, FieldSpec, FormField, InputType};
pub use form_model::{Form, FormModel, FormValues};
pub use rules::ValidationRule;
