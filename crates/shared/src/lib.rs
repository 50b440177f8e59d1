//! # Catalog 共有ユーティリティ
//!
//! サービス横断で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, service）から依存されうる
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（HTTP レスポンス変換は各サービスの責務）
//!
//! ## モジュール構成
//!
//! - [`error_response`] - RFC 9457 Problem Details 形式のエラーボディ
//! - [`health`] - ヘルスチェックのレスポンス型
//! - [`observability`] - トレーシング初期化、Request ID 生成
//! - `canonical_log` - リクエスト完了サマリログ（`observability` feature）

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
