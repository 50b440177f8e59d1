//! # Catalog ドメイン層
//!
//! 商品カタログの中核となるドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ストア、外部サービス）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダ
//! - [`item`] - 商品エンティティと識別子
//!
//! ## 使用例
//!
//! ```rust
//! use catalog_domain::item::{Item, ItemId};
//! use rust_decimal::Decimal;
//!
//! let item = Item::new(ItemId::new(), "Potion", Decimal::new(9, 0), chrono::Utc::now());
//! assert_eq!(item.name(), "Potion");
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod item;
