//! # Catalog インフラ層
//!
//! 商品ストアの具体的な実装を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトと、その具体実装を提供する。
//! ユースケース層はトレイトにのみ依存するため、インメモリ実装を
//! 永続ストアに差し替えてもハンドラ・ユースケースは変更不要。
//!
//! ## 依存関係
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use catalog_infra::repository::{InMemoryItemRepository, ItemRepository};
//!
//! let repository: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::new());
//! ```

pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
