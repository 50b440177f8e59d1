//! # OpenAPI 仕様定義
//!
//! utoipa を使用して Catalog Service の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{health, item};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "Catalog API",
      version = "0.1.0",
      description = "商品カタログを管理する CRUD API"
   ),
   paths(
      // health
      health::health_check,
      // items
      item::list_items,
      item::get_item,
      item::create_item,
      item::update_item,
      item::delete_item,
   ),
   components(schemas(
      catalog_shared::ErrorResponse,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "items", description = "商品管理"),
   )
)]
pub struct ApiDoc;
