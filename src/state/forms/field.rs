//! Form field value objects

use super::rules::{first_failure, ValidationError, ValidationRule};

/// How an input should present its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    /// Masked unless the user reveals it
    Password,
}

/// One selectable choice of an option field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Declarative description of one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub initial_value: String,
    pub validators: Vec<ValidationRule>,
    pub options: Vec<FieldOption>,
    pub input_type: InputType,
    /// Submit the value without surrounding whitespace
    pub trim: bool,
}

impl FieldSpec {
    /// Create a text field spec with an empty initial value
    pub fn text(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            initial_value: String::new(),
            validators: Vec::new(),
            options: Vec::new(),
            input_type: InputType::Text,
            trim: false,
        }
    }

    /// Create an option field spec that starts on `initial`
    pub fn choice(key: &str, label: &str, options: Vec<FieldOption>, initial: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            initial_value: initial.to_string(),
            validators: Vec::new(),
            options,
            input_type: InputType::Text,
            trim: false,
        }
    }

    pub fn with_validators(mut self, validators: Vec<ValidationRule>) -> Self {
        self.validators = validators;
        self
    }

    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// True when the field picks from a fixed set of options
    pub fn is_choice(&self) -> bool {
        !self.options.is_empty()
    }
}

/// A registered field: its spec plus current value and error
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
    pub error: Option<ValidationError>,
}

impl FormField {
    pub fn new(spec: FieldSpec) -> Self {
        let value = spec.initial_value.clone();
        Self {
            spec,
            value,
            error: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.spec.key
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if !self.spec.is_choice() {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if !self.spec.is_choice() {
            self.value.pop();
        }
    }

    /// Move to the next option, wrapping at the end
    pub fn next_option(&mut self) {
        self.step_option(1);
    }

    /// Move to the previous option, wrapping at the start
    pub fn prev_option(&mut self) {
        let len = self.spec.options.len();
        if len > 0 {
            self.step_option(len - 1);
        }
    }

    fn step_option(&mut self, step: usize) {
        let len = self.spec.options.len();
        if len == 0 {
            return;
        }
        let next = self
            .selected_option()
            .map(|idx| (idx + step) % len)
            .unwrap_or(0);
        self.value = self.spec.options[next].value.clone();
    }

    /// Index of the option matching the current value
    pub fn selected_option(&self) -> Option<usize> {
        self.spec.options.iter().position(|o| o.value == self.value)
    }

    /// Re-run the validators and store the outcome
    pub fn validate(&mut self) -> bool {
        self.error = first_failure(&self.spec.validators, &self.spec.label, &self.value);
        self.error.is_none()
    }

    /// The value handed to the submit callback
    pub fn submitted_value(&self) -> String {
        if self.spec.trim {
            self.value.trim().to_string()
        } else {
            self.value.clone()
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, reveal: bool) -> String {
        match self.spec.input_type {
            InputType::Password if !reveal => "•".repeat(self.value.chars().count()),
            _ => self.value.clone(),
        }
    }
}
