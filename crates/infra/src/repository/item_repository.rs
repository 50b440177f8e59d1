//! # ItemRepository
//!
//! 商品の格納を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - トレイトは永続ストアへの差し替えを想定し、全操作が `Result` を返す
//! - 存在確認はユースケース側の責務。`update` / `delete` は対象が無くても失敗しない
//! - 確認と更新の間にロックは保持しない（check-then-act の競合は許容）

use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use catalog_domain::item::{Item, ItemId};

use crate::error::InfraError;

/// 商品リポジトリトレイト
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// 格納されている全商品を取得する（順序は不定）
    async fn find_all(&self) -> Result<Vec<Item>, InfraError>;

    /// ID で商品を検索する
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, InfraError>;

    /// 商品を追加する
    ///
    /// 同じ ID が既に存在する場合は `Conflict` を返す。
    async fn insert(&self, item: &Item) -> Result<(), InfraError>;

    /// 同じ ID の商品を置き換える
    ///
    /// 対象が存在しない場合は何もしない。
    async fn update(&self, item: &Item) -> Result<(), InfraError>;

    /// 商品を削除する
    ///
    /// 対象が存在しない場合は何もしない。
    async fn delete(&self, id: &ItemId) -> Result<(), InfraError>;
}

/// プロセス内 HashMap による ItemRepository 実装
///
/// プロセス終了とともにすべての商品は失われる。
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データを持つリポジトリを作成する
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ItemId, Item>>, InfraError> {
        self.items
            .read()
            .map_err(|e| {
                InfraError::unexpected(format!("商品ストアのロックが汚染されています: {e}"))
            })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ItemId, Item>>, InfraError> {
        self.items
            .write()
            .map_err(|e| {
                InfraError::unexpected(format!("商品ストアのロックが汚染されています: {e}"))
            })
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Item>, InfraError> {
        Ok(self.read()?.values().cloned().collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, InfraError> {
        Ok(self.read()?.get(id).cloned())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %item.id()))]
    async fn insert(&self, item: &Item) -> Result<(), InfraError> {
        let mut items = self.write()?;
        if items.contains_key(item.id()) {
            return Err(InfraError::conflict("Item", item.id().to_string()));
        }
        items.insert(item.id().clone(), item.clone());
        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %item.id()))]
    async fn update(&self, item: &Item) -> Result<(), InfraError> {
        if let Some(stored) = self.write()?.get_mut(item.id()) {
            *stored = item.clone();
        }
        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &ItemId) -> Result<(), InfraError> {
        self.write()?.remove(id);
        Ok(())
    }
}
