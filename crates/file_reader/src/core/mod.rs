pub mod file_handler;
pub mod listing;
