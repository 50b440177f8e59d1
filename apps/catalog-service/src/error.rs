//! # Catalog Service エラー定義
//!
//! ユースケース・ハンドラで発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | CoreError | HTTP Status | ボディ |
//! |-----------|-------------|--------|
//! | NotFound | 404 | 空 |
//! | Conflict | 409 | RFC 9457 |
//! | Store | 500 | RFC 9457（詳細はログのみ） |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_shared::ErrorResponse;
use thiserror::Error;

/// Catalog Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 同じ ID のリソースが既に存在する
    #[error("競合が発生しました: {0}")]
    Conflict(String),

    /// ストアのエラー
    #[error("ストアエラー: {0}")]
    Store(#[from] catalog_infra::InfraError),
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            // 404 はボディを返さない
            CoreError::NotFound(msg) => {
                tracing::debug!("{}", msg);
                StatusCode::NOT_FOUND.into_response()
            }
            CoreError::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorResponse::conflict(msg))).into_response()
            }
            CoreError::Store(e) => {
                tracing::error!(error = %e, span_trace = %e.span_trace(), "ストアエラー");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal_error()),
                )
                    .into_response()
            }
        }
    }
}
