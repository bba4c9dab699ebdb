pub mod categories;
pub mod maintenance;
pub mod posts;
