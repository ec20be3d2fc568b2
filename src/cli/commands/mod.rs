pub mod concat;
pub mod csv_to_json;
pub mod lines;
pub mod trim;
pub mod write;
