//! Application state and core logic
//!
//! The [`App`] is the signup form's container: it owns the props the form
//! renders with (`is_submitting`, `error`, `login_route`) and reacts to the
//! values the form submits by passing them to a [`SignupHandler`].

use crate::config::SignupConfig;
use crate::handler::SignupHandler;
use crate::i18n::Localizer;
use crate::state::{FocusTarget, Form, FormValues, SignupForm, SignupProps, SubmissionError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Serialize;

/// How the app finished, printed to stdout on exit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Outcome {
    SignedUp { values: FormValues },
    Login { route: String },
    Cancelled,
}

/// Main application struct
pub struct App {
    /// Signup form state
    pub signup: SignupForm,
    /// Message lookup for labels and static text
    pub localizer: Box<dyn Localizer>,
    /// Receives validated submissions
    handler: Box<dyn SignupHandler>,
    /// Whether a submission is in flight
    pub is_submitting: bool,
    /// Last rejection from the handler
    pub error: SubmissionError,
    login_route: String,
    /// Values waiting to be handed to the handler
    pending: Option<FormValues>,
    outcome: Option<Outcome>,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: &SignupConfig,
        localizer: Box<dyn Localizer>,
        handler: Box<dyn SignupHandler>,
    ) -> Self {
        let signup = SignupForm::new(localizer.as_ref());
        Self {
            signup,
            localizer,
            handler,
            is_submitting: false,
            error: SubmissionError::default(),
            login_route: config.login_route().to_string(),
            pending: None,
            outcome: None,
            status_message: None,
        }
    }

    /// Props for rendering the form
    pub fn props(&self) -> SignupProps<'_> {
        SignupProps {
            is_submitting: self.is_submitting,
            login_route: &self.login_route,
            error: &self.error,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn take_outcome(&mut self) -> Option<Outcome> {
        self.outcome.take()
    }

    pub fn cancel(&mut self) {
        self.outcome = Some(Outcome::Cancelled);
    }

    /// Handle a key press on the signup form
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;
        let shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER);
        let on_choice = self.signup.is_focus_on_choice();

        match key.code {
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('t') if shortcut => self.signup.toggle_password_visibility(),
            KeyCode::Esc => self.cancel(),
            KeyCode::Tab | KeyCode::Down => self.signup.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.signup.prev_field(),
            KeyCode::Left if on_choice => self.signup.prev_option(),
            KeyCode::Right | KeyCode::Char(' ') if on_choice => self.signup.next_option(),
            KeyCode::Enter => match self.signup.focus() {
                FocusTarget::TermsLink | FocusTarget::PrivacyLink | FocusTarget::LoginLink => {
                    self.activate_link(self.signup.focus())
                }
                _ => self.submit(),
            },
            KeyCode::Char(c) if !shortcut => self.signup.input_char(c),
            KeyCode::Backspace => self.signup.backspace(),
            _ => {}
        }
    }

    /// Run form validation; valid values wait for [`App::process_submission`]
    fn submit(&mut self) {
        if self.is_submitting {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return;
        }

        let mut submitted = None;
        self.signup.submit(|values| submitted = Some(values));
        if let Some(values) = submitted {
            self.pending = Some(values);
            self.is_submitting = true;
            self.error = SubmissionError::default();
        }
    }

    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Hand pending values to the handler and apply its verdict
    pub async fn process_submission(&mut self) {
        let Some(values) = self.pending.take() else {
            return;
        };

        match self.handler.handle_signup(&values).await {
            Ok(()) => {
                self.is_submitting = false;
                self.outcome = Some(Outcome::SignedUp { values });
            }
            Err(err) => {
                tracing::warn!("Signup rejected with code {:?}", err.code);
                self.is_submitting = false;
                self.error = err;
            }
        }
    }

    fn activate_link(&mut self, target: FocusTarget) {
        let Some(url) = self.props().link_target(target).map(str::to_string) else {
            return;
        };

        if target == FocusTarget::LoginLink {
            tracing::info!("Navigating to {url}");
            self.outcome = Some(Outcome::Login { route: url });
            return;
        }

        match open::that(&url) {
            Ok(()) => self.status_message = Some(format!("Opened {url}")),
            Err(err) => {
                tracing::warn!("Failed to open {url}: {err}");
                self.status_message = Some(format!("Could not open {url}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::MockSignupHandler;
    use crate::i18n::Catalog;
    use crate::state::{
        ACCOUNT_TYPE, COMPANY, EMAIL, EMAIL_DUPLICATE_CODE, FIRSTNAME, NON_PROFIT, PASSWORD,
    };
    use pretty_assertions::assert_eq;

    fn app_with(handler: MockSignupHandler) -> App {
        App::new(
            &SignupConfig::default(),
            Box::new(Catalog::default()),
            Box::new(handler),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        text.chars().for_each(|c| app.handle_key(key(KeyCode::Char(c))));
    }

    /// Fill the form by keyboard, starting from the initial firstname focus
    fn fill_valid(app: &mut App) {
        type_text(app, "Ann");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Lee");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "a@b.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "secret1");
    }

    mod keyboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_fields() {
            let mut app = app_with(MockSignupHandler::new());
            fill_valid(&mut app);
            let form = app.signup.form();
            assert_eq!(form.value(FIRSTNAME), "Ann");
            assert_eq!(form.value(EMAIL), "a@b.com");
            assert_eq!(form.value(PASSWORD), "secret1");
        }

        #[test]
        fn test_space_and_arrows_cycle_account_type() {
            let mut app = app_with(MockSignupHandler::new());
            app.handle_key(key(KeyCode::BackTab));
            assert_eq!(app.signup.focus(), FocusTarget::Field(ACCOUNT_TYPE));
            app.handle_key(key(KeyCode::Char(' ')));
            assert_eq!(app.signup.form().value(ACCOUNT_TYPE), NON_PROFIT);
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.signup.form().value(ACCOUNT_TYPE), COMPANY);
            app.handle_key(key(KeyCode::Left));
            assert_eq!(app.signup.form().value(ACCOUNT_TYPE), NON_PROFIT);
        }

        #[test]
        fn test_space_types_into_text_fields() {
            let mut app = app_with(MockSignupHandler::new());
            type_text(&mut app, "A n");
            assert_eq!(app.signup.form().value(FIRSTNAME), "A n");
        }

        #[test]
        fn test_ctrl_t_toggles_password_visibility() {
            let mut app = app_with(MockSignupHandler::new());
            app.handle_key(ctrl('t'));
            assert!(app.signup.password_visible());
            assert_eq!(app.signup.form().value(FIRSTNAME), "");
        }

        #[test]
        fn test_esc_cancels() {
            let mut app = app_with(MockSignupHandler::new());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
            assert_eq!(app.take_outcome(), Some(Outcome::Cancelled));
        }

        #[test]
        fn test_enter_on_login_link_navigates() {
            let mut app = app_with(MockSignupHandler::new());
            app.signup.focus_on(FocusTarget::LoginLink);
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(
                app.take_outcome(),
                Some(Outcome::Login {
                    route: "/auth/login".to_string()
                })
            );
        }

        #[test]
        fn test_login_route_from_config() {
            let config = SignupConfig {
                login_route: Some("/signin".to_string()),
                ..Default::default()
            };
            let mut app = App::new(
                &config,
                Box::new(Catalog::default()),
                Box::new(MockSignupHandler::new()),
            );
            assert_eq!(app.props().login_route, "/signin");

            app.signup.focus_on(FocusTarget::LoginLink);
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(
                app.take_outcome(),
                Some(Outcome::Login {
                    route: "/signin".to_string()
                })
            );
        }

        #[test]
        fn test_next_key_clears_status_message() {
            let mut app = app_with(MockSignupHandler::new());
            app.status_message = Some("Opened http://meetfranz.com/terms".to_string());
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.status_message, None);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_form_does_not_reach_handler() {
            let mut handler = MockSignupHandler::new();
            handler.expect_handle_signup().times(0);
            let mut app = app_with(handler);
            app.handle_key(key(KeyCode::Enter));
            assert!(!app.has_pending_submission());
            assert!(!app.is_submitting);
        }

        #[test]
        fn test_enter_queues_submission_and_shows_loading() {
            let mut app = app_with(MockSignupHandler::new());
            fill_valid(&mut app);
            app.handle_key(key(KeyCode::Enter));
            assert!(app.has_pending_submission());
            assert!(app.is_submitting);
            assert!(!app.props().submit_button(app.localizer.as_ref()).enabled);
        }

        #[test]
        fn test_submit_ignored_while_submitting() {
            let mut app = app_with(MockSignupHandler::new());
            fill_valid(&mut app);
            app.handle_key(ctrl('s'));
            app.handle_key(key(KeyCode::Char('x')));
            app.handle_key(ctrl('s'));
            assert_eq!(
                app.pending.as_ref().and_then(|v| v.get(PASSWORD)),
                Some("secret1")
            );
        }

        #[tokio::test]
        async fn test_accepted_submission_finishes_with_values() {
            let mut handler = MockSignupHandler::new();
            handler
                .expect_handle_signup()
                .withf(|values| values.get(EMAIL) == Some("a@b.com") && values.iter().count() == 6)
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(handler);
            fill_valid(&mut app);
            app.handle_key(key(KeyCode::Enter));
            app.process_submission().await;

            assert!(!app.is_submitting);
            match app.take_outcome() {
                Some(Outcome::SignedUp { values }) => {
                    assert_eq!(values.get(FIRSTNAME), Some("Ann"));
                    assert_eq!(values.get("organization"), Some(""));
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_rejected_submission_shows_error() {
            let mut handler = MockSignupHandler::new();
            handler
                .expect_handle_signup()
                .times(1)
                .returning(|_| Err(SubmissionError::new(EMAIL_DUPLICATE_CODE)));
            let mut app = app_with(handler);
            fill_valid(&mut app);
            app.handle_key(key(KeyCode::Enter));
            app.process_submission().await;

            assert!(!app.is_submitting);
            assert!(!app.should_quit());
            assert!(app.props().error.is_email_duplicate());
            assert_eq!(
                app.props().error_message(app.localizer.as_ref()),
                Some("A user with that email address already exists".to_string())
            );
        }

        #[tokio::test]
        async fn test_resubmit_clears_previous_error() {
            let mut handler = MockSignupHandler::new();
            handler
                .expect_handle_signup()
                .times(1)
                .returning(|_| Err(SubmissionError::new(EMAIL_DUPLICATE_CODE)));
            let mut app = app_with(handler);
            fill_valid(&mut app);
            app.handle_key(key(KeyCode::Enter));
            app.process_submission().await;

            app.handle_key(key(KeyCode::Enter));
            assert!(app.error.code.is_empty());
            assert!(app.is_submitting);
        }

        #[test]
        fn test_process_without_pending_is_noop() {
            let mut handler = MockSignupHandler::new();
            handler.expect_handle_signup().times(0);
            let mut app = app_with(handler);
            tokio_test::block_on(app.process_submission());
            assert!(!app.should_quit());
        }
    }

    #[test]
    fn test_outcome_json() {
        let values: FormValues = [("email".to_string(), "a@b.com".to_string())]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_string(&Outcome::SignedUp { values }).unwrap(),
            r#"{"event":"signed_up","values":{"email":"a@b.com"}}"#
        );
        assert_eq!(
            serde_json::to_string(&Outcome::Login {
                route: "/auth/login".to_string()
            })
            .unwrap(),
            r#"{"event":"login","route":"/auth/login"}"#
        );
        assert_eq!(
            serde_json::to_string(&Outcome::Cancelled).unwrap(),
            r#"{"event":"cancelled"}"#
        );
    }
}
