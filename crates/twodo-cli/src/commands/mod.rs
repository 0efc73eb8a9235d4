pub mod add;
pub mod delete;
pub mod done;
pub mod list;
