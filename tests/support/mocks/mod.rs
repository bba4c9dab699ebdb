// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod categories;
pub mod posts;
pub mod time;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// リポジトリ関連
pub use categories::InMemoryCategories;
pub use posts::InMemoryPosts;
