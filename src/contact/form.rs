use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::sanitize::{clean, is_valid_email};

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 254;
pub const MESSAGE_MAX_LEN: usize = 2000;
pub const NAME_MIN_LEN: usize = 2;
pub const MESSAGE_MIN_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Message,
    /// Hidden from humans; anything typed here marks the submission as automated.
    Honeypot,
}

impl Field {
    /// Value of the `name` attribute on the matching input.
    pub const fn attr(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
            Field::Honeypot => "honeypot",
        }
    }

    /// Input cap for the visible fields. The honeypot has none: whatever a bot
    /// puts there is discarded, never cleaned or sent.
    pub const fn max_len(self) -> Option<usize> {
        match self {
            Field::Name => Some(NAME_MAX_LEN),
            Field::Email => Some(EMAIL_MAX_LEN),
            Field::Message => Some(MESSAGE_MAX_LEN),
            Field::Honeypot => None,
        }
    }
}

/// Raw, uncleaned values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub honeypot: String,
}

impl InquiryForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::Honeypot => &self.honeypot,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
            Field::Honeypot => self.honeypot = value,
        }
    }

    pub fn is_bot(&self) -> bool {
        !self.honeypot.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the outbound body, cleaning every field again at call time.
    pub fn payload(&self) -> Payload {
        Payload {
            name: clean(&self.name, NAME_MAX_LEN),
            email: clean(&self.email, EMAIL_MAX_LEN),
            message: clean(&self.message, MESSAGE_MAX_LEN),
        }
    }
}

/// Exactly what the form endpoint receives. The honeypot never leaves the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Messages for the fields currently failing validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns true if an error was present for `field`.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

pub fn validate(form: &InquiryForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let name = clean(&form.name, NAME_MAX_LEN);
    let email = clean(&form.email, EMAIL_MAX_LEN);
    let message = clean(&form.message, MESSAGE_MAX_LEN);

    if name.chars().count() < NAME_MIN_LEN {
        errors.insert(
            Field::Name,
            "Veuillez entrer votre nom (min. 2 caractères).",
        );
    }
    if !is_valid_email(&email) {
        errors.insert(Field::Email, "Veuillez entrer une adresse email valide.");
    }
    if message.chars().count() < MESSAGE_MIN_LEN {
        errors.insert(
            Field::Message,
            "Votre message doit contenir au moins 10 caractères.",
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> InquiryForm {
        InquiryForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            honeypot: String::new(),
        }
    }

    #[test]
    fn test_boundary_lengths_pass() {
        let errors = validate(&form("Al", "a@b.co", "1234567890"));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_short_name_and_message_fail() {
        let errors = validate(&form("A", "a@b.co", "short"));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Message));
        assert!(!errors.contains(Field::Email));
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let errors = validate(&InquiryForm::default());
        let fields = errors.iter().map(|(f, _)| f).collect::<Vec<_>>();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn test_validation_sees_cleaned_values() {
        // markup and padding do not count towards the minimums
        let errors = validate(&form("  <b>A</b>  ", " a@b.co ", "<p>123456789</p>"));
        assert!(errors.contains(Field::Name));
        assert!(!errors.contains(Field::Email));
        assert!(errors.contains(Field::Message));
    }

    #[test]
    fn test_byte_order_mark_does_not_count_as_content() {
        let errors = validate(&form("\u{feff}A", "a\u{feff}@b.co", "\u{feff}123456789"));
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Email));
        assert!(errors.contains(Field::Message));
    }

    #[test]
    fn test_max_len_only_for_visible_fields() {
        assert_eq!(Field::Name.max_len(), Some(NAME_MAX_LEN));
        assert_eq!(Field::Email.max_len(), Some(EMAIL_MAX_LEN));
        assert_eq!(Field::Message.max_len(), Some(MESSAGE_MAX_LEN));
        assert_eq!(Field::Honeypot.max_len(), None);
    }

    #[test]
    fn test_validate_is_pure() {
        let f = form("Marie", "pas-un-email", "Bonjour, je suis boulanger.");
        let before = f.clone();
        assert_eq!(validate(&f), validate(&f));
        assert_eq!(f, before);
    }

    #[test]
    fn test_error_messages() {
        let errors = validate(&form("", "x", ""));
        assert_eq!(
            errors.get(Field::Email),
            Some("Veuillez entrer une adresse email valide.")
        );
        assert_eq!(errors.get(Field::Honeypot), None);
    }

    #[test]
    fn test_payload_recleans_and_drops_honeypot() {
        let mut f = form(" <i>Marie</i> Martin ", "marie@moncommerce.fr ", &"x".repeat(2500));
        f.set(Field::Honeypot, "");
        let payload = f.payload();
        assert_eq!(payload.name, "Marie Martin");
        assert_eq!(payload.email, "marie@moncommerce.fr");
        assert_eq!(payload.message.chars().count(), MESSAGE_MAX_LEN);

        let json = serde_json::to_value(&payload).expect("payload should serialize");
        let mut keys = json
            .as_object()
            .expect("payload should be an object")
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, vec!["email", "message", "name"]);
    }

    #[test]
    fn test_set_get_reset() {
        let mut f = InquiryForm::default();
        f.set(Field::Email, "a@b.co");
        f.set(Field::Honeypot, "bot-value");
        assert_eq!(f.get(Field::Email), "a@b.co");
        assert!(f.is_bot());
        f.reset();
        assert_eq!(f, InquiryForm::default());
        assert!(!f.is_bot());
    }

    #[test]
    fn test_clear_single_error() {
        let mut errors = validate(&InquiryForm::default());
        assert!(errors.clear(Field::Name));
        assert!(!errors.clear(Field::Name));
        assert_eq!(errors.len(), 2);
    }
}
