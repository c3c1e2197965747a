//! randomuser.me クライアントのエラー型

use thiserror::Error;

/// randomuser.me クライアントエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomUserError {
    /// リクエストがタイムアウトした（接続・レスポンス待ち・ボディ読み込みのいずれか）
    #[error("transport error: upstream request timed out")]
    Timeout,

    /// ネットワークエラー（DNS 解決失敗、接続拒否など）
    #[error("transport error: {0}")]
    Transport(String),

    /// 200 以外のステータスが返された
    #[error("unexpected upstream status: {0}")]
    UpstreamStatus(u16),

    /// レスポンスボディが期待する JSON 形状でない
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RandomUserError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RandomUserError::Timeout
        } else {
            RandomUserError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RandomUserError {
    fn from(err: serde_json::Error) -> Self {
        RandomUserError::Decode(err.to_string())
    }
}
