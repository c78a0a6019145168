pub mod outcome;
pub mod record;
pub mod summary;
