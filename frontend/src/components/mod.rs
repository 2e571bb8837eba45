pub mod comment;
pub mod panel;
pub mod records;
pub mod statics;
