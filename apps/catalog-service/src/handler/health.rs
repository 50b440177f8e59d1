//! # ヘルスチェックハンドラ
//!
//! ロードバランサーやコンテナオーケストレーターの死活確認用エンドポイント。
//!
//! ```text
//! GET /health
//! ```

use axum::Json;
use catalog_shared::HealthResponse;

/// ヘルスチェックエンドポイント
#[utoipa::path(
   get,
   path = "/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
