//! User profile feature: wire types, API client, validation, and the
//! edit/submit state machines backing the profile routes.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod form;
pub(crate) mod sync;
pub(crate) mod types;
pub(crate) mod validate;
