pub mod appointments;
pub mod not_found;
