//! Shared model and editing engine for the profile page.
//!
//! Everything in this crate is free of browser APIs so it can be exercised by
//! native tests; the `frontend` crate binds it to Yew components.

pub mod editor;
pub mod error;
pub mod model;
pub mod profile;
