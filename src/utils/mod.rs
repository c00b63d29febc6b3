pub mod color;
pub mod date;
pub mod file_size;
