//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata. Centralizing these helpers keeps network behavior consistent and
//! avoids duplicated request setup in routes and features.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use errors::AppError;
