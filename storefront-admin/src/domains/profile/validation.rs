//! Company profile form validation
//!
//! Every rule is evaluated on each run so the form can show all invalid
//! fields at once.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use storefront_model::ProfileField;
use storefront_model::profile::ProfileFields;
use thiserror::Error;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,15}$").expect("phone pattern"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern")
});

/// Text-only fields that must not be blank. Phone and email are required
/// too but carry their own format rules.
const REQUIRED_TEXT: [ProfileField; 5] = [
    ProfileField::Name,
    ProfileField::StreetAndNumber,
    ProfileField::Locality,
    ProfileField::Description,
    ProfileField::Slogan,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(ProfileField),
    #[error("Invalid phone: use 10 to 15 digits")]
    InvalidPhone,
    #[error("Invalid email address")]
    InvalidEmail,
}

/// Outcome of validating a profile draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<ProfileField, FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: ProfileField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> &BTreeMap<ProfileField, FieldError> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<ProfileField, FieldError> {
        self.errors
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate a draft, reporting every failing field.
pub fn validate(fields: &ProfileFields) -> ValidationReport {
    let mut errors = BTreeMap::new();

    for field in REQUIRED_TEXT {
        if is_blank(fields.get(field)) {
            errors.insert(field, FieldError::Required(field));
        }
    }

    if is_blank(&fields.phone) {
        errors.insert(
            ProfileField::Phone,
            FieldError::Required(ProfileField::Phone),
        );
    } else if !is_valid_phone(&fields.phone) {
        errors.insert(ProfileField::Phone, FieldError::InvalidPhone);
    }

    if is_blank(&fields.email) {
        errors.insert(
            ProfileField::Email,
            FieldError::Required(ProfileField::Email),
        );
    } else if !is_valid_email(&fields.email) {
        errors.insert(ProfileField::Email, FieldError::InvalidEmail);
    }

    ValidationReport { errors }
}
