pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{CATEGORY_KIND, Category, CategoryUpdate, NewCategory};
pub use repository::{CategoryReadRepository, CategoryWriteRepository};
pub use value_objects::{CategoryDescription, CategoryId, CategoryName};
