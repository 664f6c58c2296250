//! Contact form validation and submission persistence
//!
//! Validation is local only; an accepted submission is stored as JSON under a
//! single LocalStorage key so the details page can read it back.

use serde::{Deserialize, Serialize};

/// Minimum trimmed length for the name field
pub const MIN_NAME_LEN: usize = 2;
/// Minimum trimmed length for the message field
pub const MIN_MESSAGE_LEN: usize = 5;

/// Per-field validation outcome. A `None` field passed.
///
/// Messages are `'static` because the page shows a fixed set of strings; the
/// DOM error slots are keyed `#nameError`, `#emailError`, `#messageError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    /// True when every field validated.
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Iterate populated errors as `(field id, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        [
            ("name", self.name),
            ("email", self.email),
            ("message", self.message),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.map(|m| (field, m)))
    }
}

/// Loose email shape check: something before the `@`, something after it
/// containing an interior dot, no whitespace anywhere. Intentionally not an
/// RFC parser; this only catches obvious typos before the page accepts input.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let domain: Vec<char> = domain.chars().collect();
    domain.len() >= 3 && domain[1..domain.len() - 1].contains(&'.')
}

/// Validate the three form fields. Inputs are the raw field values; leading
/// and trailing whitespace does not count toward the length minimums.
pub fn validate(name: &str, email: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = name.trim();
    if name.is_empty() {
        errors.name = Some("Name is required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.name = Some("Name must be at least 2 characters");
    }

    let email = email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email address");
    }

    let message = message.trim();
    if message.is_empty() {
        errors.message = Some("Message is required");
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.message = Some("Message must be at least 5 characters");
    }

    errors
}

/// An accepted contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Locale-formatted wall-clock time of submission
    pub timestamp: String,
}

impl ContactSubmission {
    /// LocalStorage key (read by the form-details page)
    const STORAGE_KEY: &'static str = "contactFormData";

    /// Build a submission from validated field values, trimming each.
    pub fn new(name: &str, email: &str, message: &str, timestamp: String) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
            timestamp,
        }
    }

    /// Save the submission to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Contact submission saved");
            }
        }
    }

    /// Load the last submission from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let json = storage.get_item(Self::STORAGE_KEY).ok()??;
        serde_json::from_str(&json).ok()
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Option<Self> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_is_clean() {
        let errors = validate("Ada Lovelace", "ada@example.com", "Hello there!");
        assert!(errors.is_clean());
        assert_eq!(errors.iter().count(), 0);
    }

    #[test]
    fn test_missing_fields() {
        let errors = validate("", "   ", "");
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.message, Some("Message is required"));
        assert_eq!(errors.iter().count(), 3);
    }

    #[test]
    fn test_length_minimums_apply_after_trim() {
        let errors = validate("  A  ", "a@b.co", "  hi  ");
        assert_eq!(errors.name, Some("Name must be at least 2 characters"));
        assert_eq!(errors.message, Some("Message must be at least 5 characters"));
        assert!(errors.email.is_none());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));

        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("two@@ats.com"));
        assert!(!is_valid_email("spaces in@mail.com"));
        assert!(!is_valid_email("no-tld@domain"));
        assert!(!is_valid_email("dot-at-end@domain."));
        assert!(!is_valid_email("a@.startdot"));
    }

    #[test]
    fn test_submission_trims_and_round_trips() {
        let sub = ContactSubmission::new(
            "  Ada  ",
            " ada@example.com ",
            " Hello! ",
            "1/2/2026, 3:04:05 PM".to_string(),
        );
        assert_eq!(sub.name, "Ada");
        assert_eq!(sub.email, "ada@example.com");
        assert_eq!(sub.message, "Hello!");

        let json = serde_json::to_string(&sub).unwrap();
        let back: ContactSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sub);
    }
}
