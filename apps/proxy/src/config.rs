//! # プロキシ設定
//!
//! 環境変数からプロキシサーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `PROXY_HOST` | No | `0.0.0.0` | バインドアドレス（IPv4 / IPv6） |
//! | `PROXY_PORT` | No | `8080` | ポート番号 |
//! | `RANDOM_USER_API_URL` | No | `https://randomuser.me/api/` | 呼び出し先 URL |
//! | `RANDOM_USER_TIMEOUT_SECS` | No | `10` | 外部 API 呼び出しのタイムアウト（秒） |

use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use thiserror::Error;

use crate::client::{DEFAULT_TIMEOUT, RANDOM_USER_API_URL};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 値の形式が不正
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// プロキシサーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// バインドアドレス
    pub host: IpAddr,
    /// ポート番号
    pub port: u16,
    /// randomuser.me の URL
    pub random_user_url: String,
    /// 外部 API 呼び出しのタイムアウト
    pub timeout: Duration,
}

impl ProxyConfig {
    /// 待ち受けアドレス
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// テスト間で環境変数が競合しないよう、取得元を差し替え可能にしている。
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("PROXY_HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PROXY_HOST",
                value,
            })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup("PROXY_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PROXY_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let random_user_url =
            lookup("RANDOM_USER_API_URL").unwrap_or_else(|| RANDOM_USER_API_URL.to_string());

        let timeout = match lookup("RANDOM_USER_TIMEOUT_SECS") {
            Some(value) => parse_timeout_secs(&value).ok_or(ConfigError::Invalid {
                name: "RANDOM_USER_TIMEOUT_SECS",
                value,
            })?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            host,
            port,
            random_user_url,
            timeout,
        })
    }
}

/// 秒数をパースする。0 秒は無効とする
fn parse_timeout_secs(value: &str) -> Option<Duration> {
    value
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
