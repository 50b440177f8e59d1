//! # HTTP ハンドラ
//!
//! axum のリクエストを受け取り、ユースケースを呼び出してレスポンスに変換する。
//!
//! ## モジュール構成
//!
//! - `health`: ヘルスチェック
//! - `item`: 商品 CRUD

pub mod health;
pub mod item;

pub use health::health_check;
pub use item::{
    CreateItemRequest,
    ItemDto,
    ItemState,
    UpdateItemRequest,
    create_item,
    delete_item,
    get_item,
    list_items,
    update_item,
};
