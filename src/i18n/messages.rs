//! Message descriptors used by the signup form

/// A catalog key with the text used when no translation exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDescriptor {
    pub id: &'static str,
    pub default_message: &'static str,
}

impl MessageDescriptor {
    pub const fn new(id: &'static str, default_message: &'static str) -> Self {
        Self {
            id,
            default_message,
        }
    }
}

pub const HEADLINE: MessageDescriptor = MessageDescriptor::new("signup.headline", "Sign up");
pub const FIRSTNAME_LABEL: MessageDescriptor =
    MessageDescriptor::new("signup.firstname.label", "Firstname");
pub const LASTNAME_LABEL: MessageDescriptor =
    MessageDescriptor::new("signup.lastname.label", "Lastname");
pub const EMAIL_LABEL: MessageDescriptor =
    MessageDescriptor::new("signup.email.label", "Email address");
pub const COMPANY_LABEL: MessageDescriptor =
    MessageDescriptor::new("signup.company.label", "Company");
pub const PASSWORD_LABEL: MessageDescriptor =
    MessageDescriptor::new("signup.password.label", "Password");
pub const LEGAL_INFO: MessageDescriptor = MessageDescriptor::new(
    "signup.legal.info",
    "By creating a Franz account you accept the",
);
pub const TERMS: MessageDescriptor =
    MessageDescriptor::new("signup.legal.terms", "Terms of service");
pub const PRIVACY: MessageDescriptor =
    MessageDescriptor::new("signup.legal.privacy", "Privacy Statement");
pub const SUBMIT_BUTTON_LABEL: MessageDescriptor =
    MessageDescriptor::new("signup.submit.label", "Create account");
pub const LOGIN_LINK: MessageDescriptor =
    MessageDescriptor::new("signup.link.login", "Already have an account, sign in?");
pub const EMAIL_DUPLICATE: MessageDescriptor = MessageDescriptor::new(
    "signup.emailDuplicate",
    "A user with that email address already exists",
);


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [MessageDescriptor; 12] = [
        HEADLINE,
        FIRSTNAME_LABEL,
        LASTNAME_LABEL,
        EMAIL_LABEL,
        COMPANY_LABEL,
        PASSWORD_LABEL,
        LEGAL_INFO,
        TERMS,
        PRIVACY,
        SUBMIT_BUTTON_LABEL,
        LOGIN_LINK,
        EMAIL_DUPLICATE,
    ];

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = ALL.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), ALL.len());
    }

    #[test]
    fn test_ids_are_namespaced() {
        assert!(ALL.iter().all(|m| m.id.starts_with("signup.")));
    }
}
