//! # ユースケース層
//!
//! Catalog Service のアプリケーションロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと時刻プロバイダを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、存在確認などはユースケースに集約

pub mod item;

pub use item::{CreateItemInput, ItemUseCaseImpl, UpdateItemInput};
