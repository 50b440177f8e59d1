//! 商品管理ユースケース

use std::sync::Arc;

use catalog_domain::{
    clock::Clock,
    item::{Item, ItemId},
};
use catalog_infra::{InfraError, repository::ItemRepository};
use rust_decimal::Decimal;

use crate::error::CoreError;

/// 商品作成の入力
///
/// ID と登録日時はサーバー側で決定するため含まない。
pub struct CreateItemInput {
    pub name:  String,
    pub price: Decimal,
}

/// 商品更新の入力
///
/// 名前と価格を丸ごと置き換える（部分更新は扱わない）。
pub struct UpdateItemInput {
    pub item_id: ItemId,
    pub name:    String,
    pub price:   Decimal,
}

/// 商品管理ユースケース
pub struct ItemUseCaseImpl {
    item_repository: Arc<dyn ItemRepository>,
    clock:           Arc<dyn Clock>,
}

impl ItemUseCaseImpl {
    pub fn new(item_repository: Arc<dyn ItemRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            item_repository,
            clock,
        }
    }

    /// 商品一覧を取得する（順序は不定）
    ///
    /// 取得件数を `HH:MM:SS: Retrieved N items` の形式でログに残す。
    pub async fn list_items(&self) -> Result<Vec<Item>, CoreError> {
        let items = self.item_repository.find_all().await?;

        tracing::info!(
            count = items.len(),
            "{}: Retrieved {} items",
            self.clock.now().format("%H:%M:%S"),
            items.len()
        );

        Ok(items)
    }

    /// 商品を 1 件取得する
    pub async fn get_item(&self, item_id: &ItemId) -> Result<Item, CoreError> {
        self.item_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("商品が見つかりません: {item_id}")))
    }

    /// 商品を作成する
    ///
    /// 1. サーバー側で ID を採番し、現在時刻を登録日時とする
    /// 2. ストアに追加する（ID 衝突は Conflict にマッピング）
    pub async fn create_item(&self, input: CreateItemInput) -> Result<Item, CoreError> {
        let item = Item::new(ItemId::new(), input.name, input.price, self.clock.now());

        self.item_repository
            .insert(&item)
            .await
            .map_err(conflict_or_store)?;

        tracing::info!(item_id = %item.id(), "商品を作成しました");
        Ok(item)
    }

    /// 商品の名前と価格を更新する
    ///
    /// ID と登録日時は既存の値を保持する。
    /// 存在確認と置き換えの間に削除された場合、置き換えは何もしない。
    pub async fn update_item(&self, input: UpdateItemInput) -> Result<Item, CoreError> {
        let current = self.get_item(&input.item_id).await?;
        let updated = current.with_details(input.name, input.price);

        self.item_repository.update(&updated).await?;

        tracing::info!(item_id = %updated.id(), "商品を更新しました");
        Ok(updated)
    }

    /// 商品を削除する
    pub async fn delete_item(&self, item_id: &ItemId) -> Result<(), CoreError> {
        self.get_item(item_id).await?;

        self.item_repository.delete(item_id).await?;

        tracing::info!(%item_id, "商品を削除しました");
        Ok(())
    }
}

/// ID 衝突は Conflict に、それ以外はストアエラーとして扱う
fn conflict_or_store(e: InfraError) -> CoreError {
    match e.as_conflict() {
        Some((entity, id)) => CoreError::Conflict(format!("{entity} は既に存在します: {id}")),
        None => CoreError::Store(e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use catalog_domain::clock::FixedClock;
    use catalog_infra::repository::InMemoryItemRepository;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// 出力された INFO イベントのフィールドを記録する Layer
    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    }

    struct FieldVisitor(Vec<(String, String)>);

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }

        fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
            self.0.push((field.name().to_string(), value.to_string()));
        }
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() != tracing::Level::INFO {
                return;
            }
            let mut visitor = FieldVisitor(Vec::new());
            event.record(&mut visitor);
            self.events.lock().unwrap().push(visitor.0);
        }
    }

    fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    struct Sut {
        usecase:    ItemUseCaseImpl,
        repository: Arc<InMemoryItemRepository>,
    }

    #[fixture]
    fn sut() -> Sut {
        let repository = Arc::new(InMemoryItemRepository::new());
        let usecase = ItemUseCaseImpl::new(
            repository.clone(),
            Arc::new(FixedClock::new(fixed_now())),
        );
        Sut {
            usecase,
            repository,
        }
    }

    fn create_input(name: &str, price: Decimal) -> CreateItemInput {
        CreateItemInput {
            name: name.to_string(),
            price,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_itemはidを採番し現在時刻を登録日時にする(sut: Sut) {
        let item = sut
            .usecase
            .create_item(create_input("Widget", Decimal::new(500, 2)))
            .await
            .unwrap();

        assert_eq!(item.name(), "Widget");
        assert_eq!(item.price(), Decimal::new(500, 2));
        assert_eq!(item.created_date(), fixed_now());
        assert_eq!(
            sut.repository.find_by_id(item.id()).await.unwrap(),
            Some(item)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_itemを繰り返すと異なるidが採番される(sut: Sut) {
        let first = sut
            .usecase
            .create_item(create_input("Potion", Decimal::new(9, 0)))
            .await
            .unwrap();
        let second = sut
            .usecase
            .create_item(create_input("Potion", Decimal::new(9, 0)))
            .await
            .unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(sut.usecase.list_items().await.unwrap().len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在しない商品のget_itemはnot_foundになる(sut: Sut) {
        let result = sut.usecase.get_item(&ItemId::new()).await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_itemはidと登録日時を保持して名前と価格を置き換える(
        sut: Sut,
    ) {
        let created = sut
            .usecase
            .create_item(create_input("Widget", Decimal::new(500, 2)))
            .await
            .unwrap();

        let updated = sut
            .usecase
            .update_item(UpdateItemInput {
                item_id: created.id().clone(),
                name:    "Widget2".to_string(),
                price:   Decimal::new(600, 2),
            })
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.created_date(), created.created_date());
        assert_eq!(updated.name(), "Widget2");
        assert_eq!(
            sut.usecase.get_item(created.id()).await.unwrap(),
            updated
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在しない商品のupdate_itemはnot_foundになりストアは変わらない(
        sut: Sut,
    ) {
        let result = sut
            .usecase
            .update_item(UpdateItemInput {
                item_id: ItemId::new(),
                name:    "Ghost".to_string(),
                price:   Decimal::new(1, 0),
            })
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
        assert!(sut.usecase.list_items().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_item後はget_itemがnot_foundになる(sut: Sut) {
        let created = sut
            .usecase
            .create_item(create_input("Bronze Shield", Decimal::new(18, 0)))
            .await
            .unwrap();

        sut.usecase.delete_item(created.id()).await.unwrap();

        assert!(matches!(
            sut.usecase.get_item(created.id()).await,
            Err(CoreError::NotFound(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在しない商品のdelete_itemはnot_foundになる(sut: Sut) {
        let result = sut.usecase.delete_item(&ItemId::new()).await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_itemsは作成数から削除数を引いた件数を返す(sut: Sut) {
        let mut ids = Vec::new();
        for name in ["Potion", "Iron Sword", "Bronze Shield"] {
            let item = sut
                .usecase
                .create_item(create_input(name, Decimal::new(10, 0)))
                .await
                .unwrap();
            ids.push(item.id().clone());
        }

        sut.usecase.delete_item(&ids[0]).await.unwrap();

        assert_eq!(sut.usecase.list_items().await.unwrap().len(), 2);
    }

    #[test]
    fn test_id衝突はconflictにそれ以外はstoreにマッピングされる() {
        let conflict = conflict_or_store(InfraError::conflict("Item", "I-001"));
        let unexpected = conflict_or_store(InfraError::unexpected("ロックが汚染されています"));

        assert!(matches!(conflict, CoreError::Conflict(msg) if msg.contains("I-001")));
        assert!(matches!(unexpected, CoreError::Store(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_itemsは取得時刻と件数をログに出力する(sut: Sut) {
        // Given
        for name in ["Potion", "Iron Sword"] {
            sut.repository
                .insert(&Item::new(ItemId::new(), name, Decimal::new(10, 0), fixed_now()))
                .await
                .unwrap();
        }
        let capture = CaptureLayer::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

        // When
        sut.usecase.list_items().await.unwrap();

        // Then
        let events = capture.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(field(&events[0], "count"), Some("2"));
        assert_eq!(
            field(&events[0], "message"),
            Some("22:13:20: Retrieved 2 items")
        );
    }
}
