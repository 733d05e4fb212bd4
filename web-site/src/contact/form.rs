//! ContactForm - field values, inline validation and submission status

use super::submit::SubmitError;

/// Shortest accepted project description, in trimmed characters
pub const MIN_MESSAGE_CHARS: usize = 10;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Project description is required";
pub const MESSAGE_TOO_SHORT: &str = "Please provide more details about your project";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Element id of the input, also used to derive the error's id
    pub fn input_id(&self) -> &'static str {
        match self {
            Self::Name => "contact-name",
            Self::Email => "contact-email",
            Self::Message => "contact-message",
        }
    }

    pub fn error_id(&self) -> &'static str {
        match self {
            Self::Name => "name-error",
            Self::Email => "email-error",
            Self::Message => "message-error",
        }
    }
}

/// What the visitor typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDetails {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(NAME_REQUIRED);
        }

        if self.email.trim().is_empty() {
            errors.email = Some(EMAIL_REQUIRED);
        } else if !is_valid_email(&self.email) {
            errors.email = Some(EMAIL_INVALID);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.message = Some(MESSAGE_REQUIRED);
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.message = Some(MESSAGE_TOO_SHORT);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the domain
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// One message per field, `None` when the field is fine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Why `begin_submit` did not hand out a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    Invalid(FieldErrors),
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    details: ContactDetails,
    errors: FieldErrors,
    status: FormStatus,
    failure: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Form-level message from the last failed delivery
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Update one field; typing into a field clears its error
    pub fn set_field(&mut self, field: Field, value: String) {
        *self.details.slot(field) = value;
        self.errors.clear(field);
    }

    /// Validate and move to `Submitting`, returning the snapshot to deliver
    pub fn begin_submit(&mut self) -> Result<ContactDetails, SubmitBlocked> {
        if self.status == FormStatus::Submitting {
            return Err(SubmitBlocked::InFlight);
        }
        match self.details.validate() {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.failure = None;
                self.status = FormStatus::Submitting;
                log::debug!("contact form submitting");
                Ok(self.details.clone())
            }
            Err(errors) => {
                self.errors = errors;
                Err(SubmitBlocked::Invalid(errors))
            }
        }
    }

    /// Record the transport's verdict for the in-flight submission
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        if self.status != FormStatus::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.details = ContactDetails::default();
                self.status = FormStatus::Submitted;
                log::info!("contact form delivered");
            }
            Err(err) => {
                log::error!("contact form delivery failed: {err}");
                self.failure = Some(err.to_string());
                self.status = FormStatus::Editing;
            }
        }
    }

    /// "Send another message"
    pub fn start_over(&mut self) {
        self.status = FormStatus::Editing;
        self.failure = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, name.into());
        form.set_field(Field::Email, email.into());
        form.set_field(Field::Message, message.into());
        form
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("john@company.com"));
        assert!(is_valid_email("a@b.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@company.com"));
        assert!(!is_valid_email("john@company"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john@company."));
        assert!(!is_valid_email("jo hn@company.com"));
        assert!(!is_valid_email("john@@company.com"));
    }

    #[test]
    fn empty_name_blocks_submission() {
        let mut form = filled("", "john@company.com", "A brand new SaaS product");
        let blocked = form.begin_submit().unwrap_err();
        assert_eq!(
            blocked,
            SubmitBlocked::Invalid(FieldErrors {
                name: Some(NAME_REQUIRED),
                ..Default::default()
            })
        );
        assert_eq!(form.status(), FormStatus::Editing);
    }

    #[test]
    fn malformed_email_is_reported() {
        let mut form = filled("John", "not-an-email", "A brand new SaaS product");
        assert!(form.begin_submit().is_err());
        assert_eq!(form.errors().get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(form.errors().get(Field::Name), None);
    }

    #[test]
    fn short_message_is_reported() {
        let mut form = filled("John", "john@company.com", "short");
        assert!(form.begin_submit().is_err());
        assert_eq!(form.errors().get(Field::Message), Some(MESSAGE_TOO_SHORT));
    }

    #[test]
    fn message_length_ignores_surrounding_whitespace() {
        let mut form = filled("John", "john@company.com", "   123456789   ");
        assert!(form.begin_submit().is_err());
        form.set_field(Field::Message, "  1234567890  ".into());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn all_empty_reports_every_field() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());
        let errors = form.errors();
        assert_eq!(errors.name, Some(NAME_REQUIRED));
        assert_eq!(errors.email, Some(EMAIL_REQUIRED));
        assert_eq!(errors.message, Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn typing_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        let _ = form.begin_submit();
        form.set_field(Field::Email, "j".into());
        assert_eq!(form.errors().email, None);
        assert_eq!(form.errors().name, Some(NAME_REQUIRED));
    }

    #[test]
    fn success_clears_fields_and_shows_confirmation() {
        let mut form = filled("John", "john@company.com", "We need a booking app");
        let details = form.begin_submit().unwrap();
        assert_eq!(details.name, "John");
        assert_eq!(form.status(), FormStatus::Submitting);

        form.finish_submit(Ok(()));
        assert_eq!(form.status(), FormStatus::Submitted);
        assert_eq!(form.details(), &ContactDetails::default());

        form.start_over();
        assert_eq!(form.status(), FormStatus::Editing);
    }

    #[test]
    fn second_submit_while_in_flight_is_blocked() {
        let mut form = filled("John", "john@company.com", "We need a booking app");
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn failed_delivery_keeps_fields() {
        let mut form = filled("John", "john@company.com", "We need a booking app");
        form.begin_submit().unwrap();
        form.finish_submit(Err(SubmitError::Rejected("mailbox full".into())));
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(form.details().name, "John");
        assert!(form.failure().unwrap().contains("mailbox full"));
    }
}
