pub mod program;
pub mod record_id;
pub mod student;
