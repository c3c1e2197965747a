//! # randomuser.me クライアント
//!
//! ランダムユーザー生成 API を呼び出し、レスポンスをエンベロープに変換する。
//!
//! ## エンドポイント
//!
//! - `GET https://randomuser.me/api/` - ランダムなユーザーを 1 件生成する
//!
//! リトライは行わない。1 回の失敗はそのまま呼び出し元に返す。

mod error;
mod response;
mod types;

use std::time::Duration;

use async_trait::async_trait;
pub use error::RandomUserError;
pub use types::{UserEnvelope, UserRecord};

use self::response::handle_response;

/// randomuser.me の URL
pub const RANDOM_USER_API_URL: &str = "https://randomuser.me/api/";

/// 外部 API 呼び出しのタイムアウト
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// randomuser.me クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait RandomUserClient: Send + Sync {
    /// ランダムユーザーを取得する
    ///
    /// # 戻り値
    ///
    /// ステータス 200 かつ JSON のパースに成功すれば `UserEnvelope`。
    /// `results` が空でもエラーにはしない。
    async fn fetch_random_user(&self) -> Result<UserEnvelope, RandomUserError>;
}

/// randomuser.me クライアント実装
///
/// 内部の `reqwest::Client` は起動時に 1 つだけ作成し、全リクエストで共有する。
#[derive(Debug, Clone)]
pub struct RandomUserClientImpl {
    api_url: String,
    client: reqwest::Client,
}

impl RandomUserClientImpl {
    /// 新しい RandomUserClient を作成する
    ///
    /// # 引数
    ///
    /// - `api_url`: 呼び出し先 URL（通常は [`RANDOM_USER_API_URL`]）
    /// - `timeout`: リクエスト全体（接続からボディ読み込みまで）のタイムアウト
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_url: api_url.to_string(),
            client,
        })
    }
}

#[async_trait]
impl RandomUserClient for RandomUserClientImpl {
    #[tracing::instrument(skip_all, fields(url = %self.api_url))]
    async fn fetch_random_user(&self) -> Result<UserEnvelope, RandomUserError> {
        let response = self.client.get(&self.api_url).send().await?;
        let envelope = handle_response(response).await?;

        tracing::debug!(
            results = envelope.results.len(),
            seed = envelope.seed(),
            "randomuser.me からレスポンスを受信しました"
        );

        Ok(envelope)
    }
}
