pub mod attachment;
pub mod record;
pub mod schema;
