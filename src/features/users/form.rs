//! Form state for the profile edit view: the editable draft, per-field
//! validation errors, and the read-only/editable toggle. All mutation goes
//! through the methods here; no network calls originate in this module.

use crate::features::users::types::UserProfile;
use crate::features::users::validate::{self, Field, FieldErrors};

/// Client-local snapshot of a profile's editable fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileDraft {
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub email: String,
}

impl ProfileDraft {
    /// Snapshots the mutable subset of a fetched profile.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            display_name: profile.display_name.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            age: profile.age.clone(),
            email: profile.email.clone(),
        }
    }

    /// Field values in validator order.
    pub fn fields(&self) -> [(Field, &str); 5] {
        [
            (Field::DisplayName, self.display_name.as_str()),
            (Field::FirstName, self.first_name.as_str()),
            (Field::LastName, self.last_name.as_str()),
            (Field::Age, self.age.as_str()),
            (Field::Email, self.email.as_str()),
        ]
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::DisplayName => &self.display_name,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Age => &self.age,
            Field::Email => &self.email,
            Field::Username => "",
        }
    }
}

/// Draft, errors, and edit-mode triple for the profile view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    draft: ProfileDraft,
    errors: FieldErrors,
    editing: bool,
}

impl ProfileForm {
    /// Replaces the draft wholesale with the mutable subset of a fetched
    /// profile and clears all validation errors. Called once per successful
    /// fetch.
    pub fn initialize(&mut self, profile: &UserProfile) {
        self.draft = ProfileDraft::from_profile(profile);
        self.errors.clear();
    }

    /// Overwrites one draft field and clears exactly that field's error.
    /// Validation of the new value is deferred to submission time.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::DisplayName => self.draft.display_name = value,
            Field::FirstName => self.draft.first_name = value,
            Field::LastName => self.draft.last_name = value,
            Field::Age => self.draft.age = value,
            Field::Email => self.draft.email = value,
            // Username is never editable on the profile view.
            Field::Username => return,
        }
        self.errors.remove(&field);
    }

    /// Flips the read-only/editable flag. Draft contents and errors are left
    /// untouched either way.
    pub fn toggle_edit(&mut self) {
        self.editing = !self.editing;
    }

    /// Runs the validator over the current draft, replacing the error map.
    /// Returns `true` when the draft is clean and may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = validate::validate(self.draft.fields());
        self.errors.is_empty()
    }

    /// Marks a confirmed remote update: errors are cleared and the view
    /// returns to read-only. The draft stays as-is; it is now authoritative.
    pub fn mark_saved(&mut self) {
        self.errors.clear();
        self.editing = false;
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn editing(&self) -> bool {
        self.editing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::validate::{INVALID_AGE_MESSAGE, REQUIRED_MESSAGE};

    fn fetched_profile() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            username: "bob".to_string(),
            display_name: "Bob".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Lee".to_string(),
            age: "29".to_string(),
            email: "bob@x.com".to_string(),
            created_at: "2023-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn initialize_replaces_draft_and_clears_errors() {
        let mut form = ProfileForm::default();
        form.set_field(Field::Email, String::new());
        form.validate();
        assert!(!form.errors().is_empty());

        form.initialize(&fetched_profile());

        assert!(form.errors().is_empty());
        assert_eq!(form.draft().display_name, "Bob");
        assert_eq!(form.draft().age, "29");
        assert_eq!(form.draft().email, "bob@x.com");
        assert!(!form.editing());
    }

    #[test]
    fn set_field_clears_only_that_fields_error() {
        let mut form = ProfileForm::default();
        form.initialize(&fetched_profile());
        form.set_field(Field::Email, String::new());
        form.set_field(Field::FirstName, String::new());
        assert!(!form.validate());
        assert_eq!(form.error(Field::Email), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error(Field::FirstName), Some(REQUIRED_MESSAGE));

        form.set_field(Field::Email, "x".to_string());

        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error(Field::FirstName), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn set_field_clears_error_even_for_still_invalid_value() {
        let mut form = ProfileForm::default();
        form.initialize(&fetched_profile());
        form.set_field(Field::Age, "abc".to_string());
        assert!(!form.validate());
        assert_eq!(form.error(Field::Age), Some(INVALID_AGE_MESSAGE));

        form.set_field(Field::Age, "still not a number".to_string());

        assert_eq!(form.error(Field::Age), None);
    }

    #[test]
    fn username_is_not_part_of_the_draft() {
        let mut form = ProfileForm::default();
        form.initialize(&fetched_profile());

        form.set_field(Field::Username, "hacker".to_string());

        assert_eq!(form.draft(), &ProfileDraft::from_profile(&fetched_profile()));
    }

    #[test]
    fn toggle_edit_keeps_draft_and_errors() {
        let mut form = ProfileForm::default();
        form.initialize(&fetched_profile());
        form.set_field(Field::Email, String::new());
        form.validate();

        form.toggle_edit();
        assert!(form.editing());
        assert_eq!(form.error(Field::Email), Some(REQUIRED_MESSAGE));
        assert_eq!(form.draft().email, "");

        form.toggle_edit();
        assert!(!form.editing());
        assert_eq!(form.draft().email, "");
    }

    #[test]
    fn validate_replaces_previous_errors_wholesale() {
        let mut form = ProfileForm::default();
        form.initialize(&fetched_profile());
        form.set_field(Field::Email, String::new());
        form.validate();

        form.set_field(Field::Email, "a@b.com".to_string());
        form.set_field(Field::Age, "abc".to_string());
        assert!(!form.validate());

        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error(Field::Age), Some(INVALID_AGE_MESSAGE));
    }

    #[test]
    fn mark_saved_exits_edit_mode_and_clears_errors() {
        let mut form = ProfileForm::default();
        form.initialize(&fetched_profile());
        form.toggle_edit();
        form.set_field(Field::DisplayName, "Bobby".to_string());

        form.mark_saved();

        assert!(!form.editing());
        assert!(form.errors().is_empty());
        assert_eq!(form.draft().display_name, "Bobby");
    }
}
