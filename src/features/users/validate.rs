//! Pure form validation for profile fields. The validator only reports
//! problems; callers decide whether to block submission by checking that the
//! returned map is empty.

use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_AGE_MESSAGE: &str = "Please enter a valid age";

/// Editable form fields across the registration and profile-edit views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Username,
    DisplayName,
    FirstName,
    LastName,
    Age,
    Email,
}

impl Field {
    /// Form control name, matching the wire field name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::DisplayName => "displayName",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Age => "age",
            Field::Email => "email",
        }
    }

    /// HTML input type used when rendering the field.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Age => "number",
            Field::Email => "email",
            _ => "text",
        }
    }

    /// Human-readable label rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::DisplayName => "Display Name",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Age => "Age",
            Field::Email => "Email",
        }
    }
}

/// Per-field validation errors keyed by field.
pub type FieldErrors = BTreeMap<Field, String>;

/// Checks the given field values against the required-field and age rules.
///
/// Both rules run over the full set without short-circuiting: every empty
/// field is flagged, and `Age` is additionally flagged whenever its value
/// does not parse to a finite number (the empty string included, in which
/// case the age message wins).
pub fn validate<'a, I>(values: I) -> FieldErrors
where
    I: IntoIterator<Item = (Field, &'a str)>,
{
    let mut errors = FieldErrors::new();

    for (field, value) in values {
        if value.is_empty() {
            errors.insert(field, REQUIRED_MESSAGE.to_string());
        }

        // `f64` parsing accepts "nan" and "inf"; neither is a usable age.
        if field == Field::Age && !value.trim().parse::<f64>().is_ok_and(f64::is_finite) {
            errors.insert(Field::Age, INVALID_AGE_MESSAGE.to_string());
        }
    }

    errors
}
