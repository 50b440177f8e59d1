//! # 商品
//!
//! カタログに登録される商品（名前・価格・登録日時）を表すドメインモデル。
//!
//! ## 不変条件
//!
//! - `id` はサーバー側で採番され、作成後は変更されない
//! - `created_date` は作成時刻で固定され、変更されない
//! - 更新で変わるのは `name` と `price` のみ
//!
//! 名前や価格の値そのものには制約を設けない（リクエストの型が合えば受け付ける）。
//!
//! ## 使用例
//!
//! ```rust
//! use catalog_domain::item::{Item, ItemId};
//! use rust_decimal::Decimal;
//!
//! let item = Item::new(ItemId::new(), "Iron Sword", Decimal::new(20, 0), chrono::Utc::now());
//! let updated = item.clone().with_details("Steel Sword", Decimal::new(35, 0));
//!
//! assert_eq!(updated.id(), item.id());
//! assert_eq!(updated.created_date(), item.created_date());
//! assert_eq!(updated.name(), "Steel Sword");
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

define_uuid_id! {
    /// 商品の一意識別子
    pub struct ItemId;
}

/// 商品エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id:           ItemId,
    name:         String,
    price:        Decimal,
    created_date: DateTime<Utc>,
}

impl Item {
    /// 新しい商品を作成する
    ///
    /// `now` が登録日時として固定される。
    pub fn new(id: ItemId, name: impl Into<String>, price: Decimal, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            created_date: now,
        }
    }

    /// 名前と価格を差し替えた商品を返す
    ///
    /// `id` と `created_date` は元の値を引き継ぐ。
    pub fn with_details(self, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            ..self
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}
