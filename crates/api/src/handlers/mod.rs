//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `revtox_db` and
//! map errors via [`crate::error::AppError`].

pub mod annotation;
