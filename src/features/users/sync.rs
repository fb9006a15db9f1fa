//! Profile view orchestration: reconciles the remote fetch with the form
//! state and gates the update/delete mutations. The machine is free of IO:
//! `begin_*` decides whether a remote call may be issued and hands back the
//! payload, `finish_*` applies the outcome. The route drives the actual HTTP
//! calls and feeds results back in, which keeps every transition unit-testable
//! without a network.

use crate::app_lib::AppError;
use crate::features::users::form::ProfileForm;
use crate::features::users::types::{UpdateRequest, UserProfile};
use crate::features::users::validate::Field;

/// Load axis of the profile view. `Failed` is terminal for the mount; there
/// is no retry path.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Remote mutation currently in flight, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PendingCall {
    Update,
    Delete,
}

/// State machine for one mounted profile view.
#[derive(Clone, Debug)]
pub struct ProfileSync {
    user_id: String,
    load: LoadState,
    form: ProfileForm,
    profile: Option<UserProfile>,
    page_error: Option<String>,
    confirming_delete: bool,
    pending: Option<PendingCall>,
    deleted: bool,
}

impl ProfileSync {
    /// Starts in the loading state for the given record identifier.
    pub fn new(user_id: String) -> Self {
        Self {
            user_id,
            load: LoadState::Loading,
            form: ProfileForm::default(),
            profile: None,
            page_error: None,
            confirming_delete: false,
            pending: None,
            deleted: false,
        }
    }

    /// Applies the outcome of the fetch issued for `user_id`. Success
    /// populates the form wholesale; failure is terminal for this mount.
    /// Outcomes arriving in any other state are ignored, as are responses
    /// tagged with another record's id (a slow fetch resolving after the
    /// route moved on must not overwrite the newer record's view).
    pub fn finish_load(&mut self, user_id: &str, result: Result<UserProfile, AppError>) {
        if self.load != LoadState::Loading || user_id != self.user_id {
            return;
        }
        match result {
            Ok(profile) => {
                self.form.initialize(&profile);
                self.profile = Some(profile);
                self.load = LoadState::Ready;
            }
            Err(err) => {
                self.load = LoadState::Failed(err.to_string());
            }
        }
    }

    /// Validates the draft and, when clean and no mutation is in flight,
    /// returns the update payload to send. `None` means nothing may be
    /// submitted: either validation failed (per-field errors are now set) or
    /// a call is already pending.
    pub fn begin_update(&mut self) -> Option<UpdateRequest> {
        if self.load != LoadState::Ready || self.pending.is_some() || self.deleted {
            return None;
        }

        self.page_error = None;
        if !self.form.validate() {
            return None;
        }

        let draft = self.form.draft();
        self.pending = Some(PendingCall::Update);
        Some(UpdateRequest {
            user_id: self.user_id.clone(),
            display_name: draft.display_name.clone(),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            age: draft.age.clone(),
            email: draft.email.clone(),
        })
    }

    /// Applies the outcome of the remote update. Success confirms the draft
    /// as authoritative and exits edit mode; failure surfaces a page-level
    /// error and leaves draft and edit mode untouched so the user can retry.
    pub fn finish_update(&mut self, result: Result<(), AppError>) {
        if self.pending != Some(PendingCall::Update) {
            return;
        }
        self.pending = None;
        match result {
            Ok(()) => {
                if let Some(profile) = self.profile.as_mut() {
                    let draft = self.form.draft();
                    profile.display_name = draft.display_name.clone();
                    profile.first_name = draft.first_name.clone();
                    profile.last_name = draft.last_name.clone();
                    profile.age = draft.age.clone();
                    profile.email = draft.email.clone();
                }
                self.form.mark_saved();
                self.page_error = None;
            }
            Err(err) => {
                self.page_error = Some(err.to_string());
            }
        }
    }

    /// Opens the delete confirmation. Ignored while a mutation is in flight.
    pub fn request_delete(&mut self) {
        if self.pending.is_none() && !self.deleted {
            self.confirming_delete = true;
        }
    }

    /// Dismisses the delete confirmation without touching anything else.
    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    /// Confirms the pending delete request. Returns `true` when the remote
    /// delete should be issued.
    pub fn confirm_delete(&mut self) -> bool {
        if !self.confirming_delete || self.pending.is_some() {
            return false;
        }
        self.confirming_delete = false;
        self.page_error = None;
        self.pending = Some(PendingCall::Delete);
        true
    }

    /// Applies the outcome of the remote delete. On success the record is
    /// gone and the caller must navigate away; on failure the view stays.
    pub fn finish_delete(&mut self, result: Result<(), AppError>) {
        if self.pending != Some(PendingCall::Delete) {
            return;
        }
        self.pending = None;
        match result {
            Ok(()) => self.deleted = true,
            Err(err) => self.page_error = Some(err.to_string()),
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set_field(field, value);
    }

    pub fn toggle_edit(&mut self) {
        if self.load == LoadState::Ready {
            self.form.toggle_edit();
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn page_error(&self) -> Option<&str> {
        self.page_error.as_deref()
    }

    pub fn confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    pub fn pending(&self) -> Option<PendingCall> {
        self.pending
    }

    pub fn deleted(&self) -> bool {
        self.deleted
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
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

    fn ready_sync() -> ProfileSync {
        let mut sync = ProfileSync::new("u1".to_string());
        sync.finish_load("u1", Ok(fetched_profile()));
        sync
    }

    #[test]
    fn load_success_populates_draft_with_mutable_subset() {
        let sync = ready_sync();

        assert_eq!(sync.load_state(), &LoadState::Ready);
        assert!(!sync.form().editing());
        assert_eq!(sync.form().draft().display_name, "Bob");
        assert_eq!(sync.form().draft().age, "29");
        assert_eq!(sync.profile().unwrap().username, "bob");
        assert_eq!(sync.profile().unwrap().created_at, "2023-01-01T00:00:00Z");
    }

    #[test]
    fn load_failure_is_terminal() {
        let mut sync = ProfileSync::new("u1".to_string());
        sync.finish_load(
            "u1",
            Err(AppError::Http {
                status: 404,
                message: "not found".to_string(),
            }),
        );

        assert!(matches!(sync.load_state(), LoadState::Failed(_)));
        assert!(sync.begin_update().is_none());

        // A late duplicate resolution must not resurrect the view.
        sync.finish_load("u1", Ok(fetched_profile()));
        assert!(matches!(sync.load_state(), LoadState::Failed(_)));
    }

    #[test]
    fn load_result_for_another_record_is_ignored() {
        let mut sync = ProfileSync::new("u2".to_string());

        // A slow response for the previously viewed record arrives first.
        sync.finish_load("u1", Ok(fetched_profile()));

        assert_eq!(sync.load_state(), &LoadState::Loading);
        assert!(sync.profile().is_none());

        let mut current = fetched_profile();
        current.id = "u2".to_string();
        current.username = "ann".to_string();
        sync.finish_load("u2", Ok(current));

        assert_eq!(sync.load_state(), &LoadState::Ready);
        assert_eq!(sync.profile().unwrap().username, "ann");
    }

    #[test]
    fn valid_submit_with_remote_success_exits_edit_mode() {
        let mut sync = ready_sync();
        sync.toggle_edit();
        sync.set_field(Field::DisplayName, "Bobby".to_string());

        let request = sync.begin_update().expect("clean draft should submit");
        assert_eq!(request.user_id, "u1");
        assert_eq!(request.display_name, "Bobby");
        assert_eq!(sync.pending(), Some(PendingCall::Update));

        sync.finish_update(Ok(()));

        assert!(!sync.form().editing());
        assert!(sync.form().errors().is_empty());
        assert_eq!(sync.page_error(), None);
        assert_eq!(sync.pending(), None);
        // The draft is now authoritative for the rendered profile.
        assert_eq!(sync.profile().unwrap().display_name, "Bobby");
    }

    #[test]
    fn invalid_submit_never_issues_a_remote_call() {
        let mut sync = ready_sync();
        sync.toggle_edit();
        sync.set_field(Field::FirstName, String::new());

        assert!(sync.begin_update().is_none());
        assert_eq!(sync.pending(), None);
        assert!(sync.form().editing());
        assert_eq!(sync.form().error(Field::FirstName), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn scenario_missing_first_name() {
        let mut sync = ready_sync();
        sync.toggle_edit();
        sync.set_field(Field::DisplayName, "Ann".to_string());
        sync.set_field(Field::FirstName, String::new());
        sync.set_field(Field::LastName, "Lee".to_string());
        sync.set_field(Field::Age, "30".to_string());
        sync.set_field(Field::Email, "a@b.com".to_string());

        assert!(sync.begin_update().is_none());

        assert_eq!(sync.form().errors().len(), 1);
        assert_eq!(sync.form().error(Field::FirstName), Some(REQUIRED_MESSAGE));
        assert!(sync.form().editing());
    }

    #[test]
    fn scenario_non_numeric_age() {
        let mut sync = ready_sync();
        sync.toggle_edit();
        sync.set_field(Field::Age, "thirty".to_string());

        assert!(sync.begin_update().is_none());

        assert_eq!(sync.form().errors().len(), 1);
        assert_eq!(sync.form().error(Field::Age), Some(INVALID_AGE_MESSAGE));
    }

    #[test]
    fn remote_update_failure_keeps_editing_and_surfaces_page_error() {
        let mut sync = ready_sync();
        sync.toggle_edit();
        sync.set_field(Field::Email, "new@b.com".to_string());

        assert!(sync.begin_update().is_some());
        sync.finish_update(Err(AppError::Network("connection refused".to_string())));

        assert!(sync.form().editing());
        assert_eq!(sync.form().draft().email, "new@b.com");
        assert!(sync.page_error().is_some());

        // The user may retry: the pending guard was released and the previous
        // page error is cleared on the next attempt.
        assert!(sync.begin_update().is_some());
        assert_eq!(sync.page_error(), None);
    }

    #[test]
    fn submit_while_pending_is_a_no_op() {
        let mut sync = ready_sync();
        sync.toggle_edit();

        assert!(sync.begin_update().is_some());
        assert!(sync.begin_update().is_none());
        assert_eq!(sync.pending(), Some(PendingCall::Update));
    }

    #[test]
    fn declined_delete_performs_no_call_and_leaves_state_unchanged() {
        let mut sync = ready_sync();
        sync.request_delete();
        assert!(sync.confirming_delete());

        sync.cancel_delete();

        assert!(!sync.confirming_delete());
        assert!(!sync.confirm_delete());
        assert_eq!(sync.pending(), None);
        assert!(!sync.deleted());
        assert_eq!(sync.load_state(), &LoadState::Ready);
    }

    #[test]
    fn confirmed_delete_success_marks_the_record_deleted() {
        let mut sync = ready_sync();
        sync.request_delete();

        assert!(sync.confirm_delete());
        assert_eq!(sync.pending(), Some(PendingCall::Delete));

        sync.finish_delete(Ok(()));

        assert!(sync.deleted());
        assert_eq!(sync.pending(), None);
    }

    #[test]
    fn delete_is_reachable_from_edit_mode() {
        let mut sync = ready_sync();
        sync.toggle_edit();
        sync.request_delete();

        assert!(sync.confirm_delete());
        sync.finish_delete(Ok(()));

        assert!(sync.deleted());
    }

    #[test]
    fn delete_failure_keeps_the_view() {
        let mut sync = ready_sync();
        sync.request_delete();
        assert!(sync.confirm_delete());

        sync.finish_delete(Err(AppError::Http {
            status: 500,
            message: "boom".to_string(),
        }));

        assert!(!sync.deleted());
        assert!(sync.page_error().is_some());
        assert_eq!(sync.load_state(), &LoadState::Ready);
    }

    #[test]
    fn delete_request_is_ignored_while_a_mutation_is_pending() {
        let mut sync = ready_sync();
        sync.toggle_edit();
        assert!(sync.begin_update().is_some());

        sync.request_delete();

        assert!(!sync.confirming_delete());
        assert!(!sync.confirm_delete());
    }
}
