pub mod repository;
pub mod services;
pub mod value_objects;

pub use repository::{SlugLookup, Sluggable};
pub use services::SlugAssigner;
pub use value_objects::{Slug, derive_base_slug};
