// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod posts;
