//! # アプリケーション構築
//!
//! ルーター定義とミドルウェアの適用を担当する。
//! `main.rs` は DI とサーバー起動に集中し、テストも同じルーターを使う。

use std::sync::Arc;

use axum::{Router, routing::get};
use catalog_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    ItemState,
    create_item,
    delete_item,
    get_item,
    health_check,
    list_items,
    update_item,
};

/// ルーターを構築する
///
/// レイヤーは下から順に内側へ適用される:
///
/// ```text
/// SetRequestIdLayer → TraceLayer → CanonicalLogLineLayer → PropagateRequestIdLayer → handler
/// ```
pub fn build_app(item_state: Arc<ItemState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(item_state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
