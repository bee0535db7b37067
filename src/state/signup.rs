//! Signup form component state
//!
//! [`SignupForm`] declares the signup field set, owns the [`FormModel`] built
//! from it, tracks keyboard focus and hands validated values to the caller's
//! submit callback. Everything the caller controls arrives through
//! [`SignupProps`].

use crate::i18n::{messages, Localizer};
use crate::state::forms::{
    FieldOption, FieldSpec, Form, FormField, FormModel, FormValues, InputType, ValidationRule,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ACCOUNT_TYPE: &str = "accountType";
pub const FIRSTNAME: &str = "firstname";
pub const LASTNAME: &str = "lastname";
pub const EMAIL: &str = "email";
pub const ORGANIZATION: &str = "organization";
pub const PASSWORD: &str = "password";

pub const INDIVIDUAL: &str = "individual";
pub const NON_PROFIT: &str = "non-profit";
pub const COMPANY: &str = "company";

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const TERMS_URL: &str = "http://meetfranz.com/terms";
pub const PRIVACY_URL: &str = "http://meetfranz.com/privacy";

/// Error code the form knows how to display
pub const EMAIL_DUPLICATE_CODE: &str = "email-duplicate";

/// Rejection reported by whoever handles the submitted values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("signup rejected: {code}")]
pub struct SubmissionError {
    pub code: String,
}

impl SubmissionError {
    #[allow(dead_code)] // Used by handlers that reject a submission
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }

    pub fn is_email_duplicate(&self) -> bool {
        self.code == EMAIL_DUPLICATE_CODE
    }
}

/// Caller-owned inputs for one render of the signup form
#[derive(Debug, Clone, Copy)]
pub struct SignupProps<'a> {
    pub is_submitting: bool,
    pub login_route: &'a str,
    pub error: &'a SubmissionError,
}

impl<'a> SignupProps<'a> {
    /// Where activating a link leads; the login link follows `login_route`
    pub fn link_target(&self, target: FocusTarget) -> Option<&'a str> {
        match target {
            FocusTarget::TermsLink => Some(TERMS_URL),
            FocusTarget::PrivacyLink => Some(PRIVACY_URL),
            FocusTarget::LoginLink => Some(self.login_route),
            FocusTarget::Field(_) | FocusTarget::SubmitButton => None,
        }
    }

    /// Message for the caller's error, if it is one the form recognises
    pub fn error_message(&self, localizer: &dyn Localizer) -> Option<String> {
        self.error
            .is_email_duplicate()
            .then(|| localizer.format_message(&messages::EMAIL_DUPLICATE))
    }

    pub fn submit_button(&self, localizer: &dyn Localizer) -> SubmitButton {
        let label = localizer.format_message(&messages::SUBMIT_BUTTON_LABEL);
        if self.is_submitting {
            SubmitButton {
                label: format!("{label} ..."),
                enabled: false,
            }
        } else {
            SubmitButton {
                label,
                enabled: true,
            }
        }
    }
}

/// What the submit button shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

/// Something on the form that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(&'static str),
    SubmitButton,
    TermsLink,
    PrivacyLink,
    LoginLink,
}

/// The signup field set, labelled through `localizer`
pub fn field_specs(localizer: &dyn Localizer) -> Vec<FieldSpec> {
    vec![
        FieldSpec::choice(
            ACCOUNT_TYPE,
            "",
            vec![
                FieldOption::new(INDIVIDUAL, "Individual"),
                FieldOption::new(NON_PROFIT, "Non-Profit"),
                FieldOption::new(COMPANY, "Company"),
            ],
            INDIVIDUAL,
        )
        .with_validators(vec![ValidationRule::Required]),
        FieldSpec::text(
            FIRSTNAME,
            &localizer.format_message(&messages::FIRSTNAME_LABEL),
        )
        .with_validators(vec![ValidationRule::Required])
        .trimmed(),
        FieldSpec::text(LASTNAME, &localizer.format_message(&messages::LASTNAME_LABEL))
            .with_validators(vec![ValidationRule::Required])
            .trimmed(),
        FieldSpec::text(EMAIL, &localizer.format_message(&messages::EMAIL_LABEL))
            .with_validators(vec![ValidationRule::Required, ValidationRule::Email])
            .trimmed(),
        // TODO: require organization once product decides whether companies must name one
        FieldSpec::text(
            ORGANIZATION,
            &localizer.format_message(&messages::COMPANY_LABEL),
        )
        .trimmed(),
        FieldSpec::text(PASSWORD, &localizer.format_message(&messages::PASSWORD_LABEL))
            .with_validators(vec![
                ValidationRule::Required,
                ValidationRule::MinLength(MIN_PASSWORD_LENGTH),
            ])
            .with_input_type(InputType::Password),
    ]
}

/// Signup form state: the field model, focus and password visibility
#[derive(Debug, Clone)]
pub struct SignupForm {
    form: FormModel,
    focus: FocusTarget,
    password_visible: bool,
}

impl SignupForm {
    /// Build the form. Labels are resolved once, here.
    pub fn new(localizer: &dyn Localizer) -> Self {
        Self {
            form: FormModel::new(field_specs(localizer)),
            focus: FocusTarget::Field(FIRSTNAME),
            password_visible: false,
        }
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.form.field(key)
    }

    pub fn is_company(&self) -> bool {
        self.form.value(ACCOUNT_TYPE) == COMPANY
    }

    /// The organization input is only offered to companies
    pub fn shows_organization(&self) -> bool {
        self.is_company()
    }

    /// Focusable rows in on-screen order
    pub fn focus_order(&self) -> Vec<FocusTarget> {
        let mut order = vec![
            FocusTarget::Field(ACCOUNT_TYPE),
            FocusTarget::Field(FIRSTNAME),
            FocusTarget::Field(LASTNAME),
            FocusTarget::Field(EMAIL),
            FocusTarget::Field(PASSWORD),
        ];
        if self.shows_organization() {
            order.push(FocusTarget::Field(ORGANIZATION));
        }
        order.extend([
            FocusTarget::SubmitButton,
            FocusTarget::TermsLink,
            FocusTarget::PrivacyLink,
            FocusTarget::LoginLink,
        ]);
        order
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    #[cfg(test)]
    pub fn focus_on(&mut self, target: FocusTarget) {
        self.focus = target;
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focus == target
    }

    /// Key of the focused field, if focus is on a field
    fn focused_key(&self) -> Option<&'static str> {
        match self.focus {
            FocusTarget::Field(key) => Some(key),
            _ => None,
        }
    }

    /// Type into the focused text input
    pub fn input_char(&mut self, c: char) {
        if let Some(key) = self.focused_key() {
            self.form.edit(key, |field| field.push_char(c));
        }
    }

    pub fn backspace(&mut self) {
        if let Some(key) = self.focused_key() {
            self.form.edit(key, FormField::pop_char);
        }
    }

    /// Cycle the focused option field forward
    pub fn next_option(&mut self) {
        if let Some(key) = self.focused_key() {
            self.form.edit(key, FormField::next_option);
        }
    }

    pub fn prev_option(&mut self) {
        if let Some(key) = self.focused_key() {
            self.form.edit(key, FormField::prev_option);
        }
    }

    /// Whether the focused field picks from options
    pub fn is_focus_on_choice(&self) -> bool {
        self.focused_key()
            .and_then(|key| self.form.field(key))
            .is_some_and(|field| field.spec.is_choice())
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Validate and collect the form, calling `on_submit` only when every
    /// field passes. Field errors stay on the model for rendering.
    pub fn submit(&mut self, on_submit: impl FnOnce(FormValues)) {
        match self.form.submit() {
            Ok(values) => {
                tracing::info!(
                    account_type = values.get(ACCOUNT_TYPE).unwrap_or_default(),
                    "Signup form passed validation"
                );
                on_submit(values);
            }
            Err(errors) => {
                tracing::debug!(
                    attempt = self.form.submit_count(),
                    "Signup form rejected: {errors}"
                );
            }
        }
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        self.focus_order().len()
    }
    fn active_field(&self) -> usize {
        self.focus_order()
            .iter()
            .position(|target| *target == self.focus)
            .unwrap_or(0)
    }
    fn set_active_field(&mut self, index: usize) {
        let order = self.focus_order();
        if let Some(target) = order.get(index.min(order.len().saturating_sub(1))) {
            self.focus = *target;
        }
    }
}
