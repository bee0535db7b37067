//! Form model: registered fields, their values and errors, and submit orchestration

use super::field::{FieldSpec, FormField};
use super::rules::ValidationError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Trait for common focus navigation over a form's focusable rows
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Field key to value mapping, in field declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Fields that failed validation on submit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{count} field(s) failed validation", count = .0.len())]
pub struct FormErrors(pub Vec<(String, ValidationError)>);

/// Owns the current values and validation state of a set of fields
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: Vec<FormField>,
    submit_count: u32,
}

impl FormModel {
    /// Register `specs` in order; each field starts on its initial value
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self {
            fields: specs.into_iter().map(FormField::new).collect(),
            submit_count: 0,
        }
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key() == key)
    }

    /// Current value of `key`, empty when the field is not registered
    pub fn value(&self, key: &str) -> &str {
        self.field(key).map(|f| f.value.as_str()).unwrap_or("")
    }

    #[cfg(test)]
    pub fn error(&self, key: &str) -> Option<&ValidationError> {
        self.field(key).and_then(|f| f.error.as_ref())
    }

    /// Number of submit attempts so far
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Apply a user edit to `key`.
    ///
    /// Once a submit has been attempted the edited field is re-validated, so
    /// errors disappear as soon as the input is fixed.
    pub fn edit(&mut self, key: &str, apply: impl FnOnce(&mut FormField)) {
        let submitted = self.submit_count > 0;
        if let Some(field) = self.fields.iter_mut().find(|f| f.key() == key) {
            apply(field);
            if submitted {
                field.validate();
            }
        }
    }

    #[cfg(test)]
    pub fn set_value(&mut self, key: &str, value: &str) {
        self.edit(key, |field| field.value = value.to_string());
    }

    /// Validate every field, keeping each field's error up to date
    pub fn validate(&mut self) -> bool {
        self.fields
            .iter_mut()
            .fold(true, |valid, field| field.validate() && valid)
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.key().to_string(), f.submitted_value()))
            .collect()
    }

    /// Validate the whole form, then collect values on success
    pub fn submit(&mut self) -> Result<FormValues, FormErrors> {
        self.submit_count += 1;
        if self.validate() {
            return Ok(self.values());
        }
        Err(FormErrors(
            self.fields
                .iter()
                .filter_map(|f| f.error.clone().map(|e| (f.key().to_string(), e)))
                .collect(),
        ))
    }
}
