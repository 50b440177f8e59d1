//! # 商品ハンドラ
//!
//! 商品カタログの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /items` - 商品一覧
//! - `GET /items/{item_id}` - 商品取得
//! - `POST /items` - 商品作成
//! - `PUT /items/{item_id}` - 商品更新（名前・価格）
//! - `DELETE /items/{item_id}` - 商品削除
//!
//! 対象の商品が存在しない場合はいずれも空ボディの `404 Not Found` を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use catalog_domain::item::{Item, ItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::CoreError,
    usecase::item::{CreateItemInput, ItemUseCaseImpl, UpdateItemInput},
};

/// 商品 API の共有状態
pub struct ItemState {
    pub usecase: ItemUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 商品作成リクエスト
///
/// `id` / `createdDate` が含まれていてもサーバー側で無視する。
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name:  String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// 商品更新リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub name:  String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// 商品 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id:           Uuid,
    pub name:         String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price:        Decimal,
    /// 登録日時（RFC 3339）
    pub created_date: String,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id:           *item.id().as_uuid(),
            name:         item.name().to_string(),
            price:        item.price(),
            created_date: item.created_date().to_rfc3339(),
        }
    }
}

// --- ハンドラ ---

/// GET /items
///
/// 全商品を取得する（順序は不定）。
#[utoipa::path(
   get,
   path = "/items",
   tag = "items",
   responses(
      (status = 200, description = "商品一覧", body = Vec<ItemDto>)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_items(
    State(state): State<Arc<ItemState>>,
) -> Result<impl IntoResponse, CoreError> {
    let items = state.usecase.list_items().await?;

    let dtos: Vec<ItemDto> = items.iter().map(ItemDto::from).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /items/{item_id}
#[utoipa::path(
   get,
   path = "/items/{item_id}",
   tag = "items",
   params(("item_id" = Uuid, Path, description = "商品ID")),
   responses(
      (status = 200, description = "商品", body = ItemDto),
      (status = 404, description = "商品が見つからない")
   )
)]
#[tracing::instrument(skip_all, fields(%item_id))]
pub async fn get_item(
    State(state): State<Arc<ItemState>>,
    Path(item_id): Path<Uuid>,
) -> Result<impl IntoResponse, CoreError> {
    let item = state.usecase.get_item(&ItemId::from_uuid(item_id)).await?;

    Ok((StatusCode::OK, Json(ItemDto::from(&item))))
}

/// POST /items
///
/// 商品を作成する。ID と登録日時はサーバー側で決定する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成された商品（`Location: /items/{id}`）
/// - `409 Conflict`: 採番した ID が既に存在する
#[utoipa::path(
   post,
   path = "/items",
   tag = "items",
   request_body = CreateItemRequest,
   responses(
      (status = 201, description = "商品作成成功", body = ItemDto,
         headers(("location" = String, description = "作成された商品の URI"))),
      (status = 409, description = "ID 重複", body = catalog_shared::ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_item(
    State(state): State<Arc<ItemState>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let input = CreateItemInput {
        name:  req.name,
        price: req.price,
    };

    let item = state.usecase.create_item(input).await?;

    let location = format!("/items/{}", item.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ItemDto::from(&item)),
    ))
}

/// PUT /items/{item_id}
///
/// 商品の名前と価格を置き換える。ID と登録日時は変わらない。
///
/// ## レスポンス
///
/// - `204 No Content`: 更新成功
/// - `404 Not Found`: 商品が見つからない
#[utoipa::path(
   put,
   path = "/items/{item_id}",
   tag = "items",
   params(("item_id" = Uuid, Path, description = "商品ID")),
   request_body = UpdateItemRequest,
   responses(
      (status = 204, description = "更新成功"),
      (status = 404, description = "商品が見つからない")
   )
)]
#[tracing::instrument(skip_all, fields(%item_id))]
pub async fn update_item(
    State(state): State<Arc<ItemState>>,
    Path(item_id): Path<Uuid>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let input = UpdateItemInput {
        item_id: ItemId::from_uuid(item_id),
        name:    req.name,
        price:   req.price,
    };

    state.usecase.update_item(input).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /items/{item_id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `404 Not Found`: 商品が見つからない
#[utoipa::path(
   delete,
   path = "/items/{item_id}",
   tag = "items",
   params(("item_id" = Uuid, Path, description = "商品ID")),
   responses(
      (status = 204, description = "削除成功"),
      (status = 404, description = "商品が見つからない")
   )
)]
#[tracing::instrument(skip_all, fields(%item_id))]
pub async fn delete_item(
    State(state): State<Arc<ItemState>>,
    Path(item_id): Path<Uuid>,
) -> Result<impl IntoResponse, CoreError> {
    state
        .usecase
        .delete_item(&ItemId::from_uuid(item_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
