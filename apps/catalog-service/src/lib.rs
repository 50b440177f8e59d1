//! # Catalog Service
//!
//! 商品カタログをプロセス内メモリで管理する HTTP API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! handler → usecase → catalog_infra::ItemRepository → HashMap
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーターとミドルウェアの構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - エラー型と HTTP レスポンス変換
//! - [`handler`] - HTTP ハンドラ
//! - [`openapi`] - OpenAPI 仕様定義
//! - [`usecase`] - アプリケーションロジック

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;

pub use app_builder::build_app;
