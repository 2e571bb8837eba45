//! Read-only cards whose content comes straight from the profile document.

pub mod languages;
pub mod learned;
