//! # プロキシのエラーハンドリング
//!
//! ハンドラのエラー定義と、axum レスポンスへの変換。
//!
//! エラーレスポンスのボディはプレーンテキストで、呼び出し元が原因を判別できるよう
//! 下位のエラー内容をそのまま含める。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::client::RandomUserError;

/// ハンドラで発生するエラー
///
/// `IntoResponse` を実装しているため、axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ProxyError {
    /// randomuser.me の呼び出しに失敗した（500 Internal Server Error）
    #[error("Error fetching user data: {0}")]
    Fetch(#[from] RandomUserError),

    /// レスポンスは正常だがユーザーが 0 件だった（502 Bad Gateway）
    #[error("No user data returned from upstream")]
    EmptyResult,
}

impl ProxyError {
    /// 対応する HTTP ステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::EmptyResult => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match &self {
            ProxyError::Fetch(err) => {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "random_user_fetch",
                    "randomuser.me の呼び出しで失敗しました: {}",
                    err
                );
            }
            ProxyError::EmptyResult => {
                tracing::warn!(
                    error.category = "external_service",
                    error.kind = "empty_result",
                    "randomuser.me が 0 件のユーザーを返しました"
                );
            }
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
