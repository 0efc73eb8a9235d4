pub mod line;
pub mod table;
