//! # Catalog Service 設定
//!
//! 環境変数からサーバー設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `CATALOG_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `CATALOG_PORT` | No | `3000` | ポート番号 |
//!
//! ログ関連（`RUST_LOG`, `LOG_FORMAT`）は `catalog_shared::observability` が読む。

use std::{env, net::SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `CATALOG_PORT` がポート番号として解釈できない
    #[error("CATALOG_PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),

    /// host と port からソケットアドレスを組み立てられない
    #[error("バインドアドレスが不正です: {0}")]
    InvalidAddress(String),
}

/// Catalog Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl CatalogConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のルックアップ関数から設定を読み込む
    ///
    /// 未設定の変数はデフォルト値を使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("CATALOG_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("CATALOG_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// バインドするソケットアドレス
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ConfigError::InvalidAddress(addr.clone()))
    }
}
