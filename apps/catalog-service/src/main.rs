//! # Catalog Service サーバー
//!
//! 商品カタログ API を提供する HTTP サーバー。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p catalog-service
//!
//! # 環境変数でポートを指定
//! CATALOG_PORT=5000 cargo run -p catalog-service
//! ```
//!
//! 商品はプロセス内メモリにのみ保持され、再起動で失われる。

use std::sync::Arc;

use anyhow::Context as _;
use catalog_domain::clock::SystemClock;
use catalog_infra::repository::InMemoryItemRepository;
use catalog_service::{
    build_app,
    config::CatalogConfig,
    handler::ItemState,
    usecase::ItemUseCaseImpl,
};
use catalog_shared::observability::{self, TracingConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルがあれば読み込む（無くてもエラーにしない）
    dotenvy::dotenv().ok();

    observability::init_tracing(TracingConfig::from_env("catalog-service"));
    let _tracing_guard = tracing::info_span!("app", service = "catalog-service").entered();

    let config = CatalogConfig::from_env().context("設定の読み込みに失敗しました")?;
    let addr = config.socket_addr()?;

    // 依存関係の組み立て
    let item_usecase = ItemUseCaseImpl::new(
        Arc::new(InMemoryItemRepository::new()),
        Arc::new(SystemClock),
    );
    let item_state = Arc::new(ItemState {
        usecase: item_usecase,
    });

    let app = build_app(item_state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Catalog Service サーバーを起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("サーバーが異常終了しました")?;

    tracing::info!("Catalog Service サーバーを停止しました");
    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C ハンドラの登録に失敗しました");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
