//! # リポジトリ
//!
//! - **依存性逆転**: ユースケースはトレイトにのみ依存する
//! - **テスタビリティ**: トレイト経由でスタブに差し替え可能

pub mod item_repository;

pub use item_repository::{InMemoryItemRepository, ItemRepository};
