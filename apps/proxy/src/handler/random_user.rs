//! # ランダムユーザー API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/users/random` - randomuser.me から 1 件取得して返す
//!
//! ## 処理の流れ
//!
//! 1. randomuser.me からエンベロープを取得する（失敗時は 500）
//! 2. `results` が空なら 502 を返す
//! 3. `results` の先頭要素だけを JSON で返す（2 件目以降は参照しない）

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    client::{RandomUserClient, UserRecord},
    error::ProxyError,
};

/// ランダムユーザー API の共有状態
pub struct RandomUserState {
    pub random_user_client: Arc<dyn RandomUserClient>,
}

/// GET /api/v1/users/random
///
/// randomuser.me のレスポンスから先頭のユーザーレコードを取り出し、
/// 受け取った JSON をそのまま返す。
#[tracing::instrument(skip_all)]
pub async fn get_random_user(
    State(state): State<Arc<RandomUserState>>,
) -> Result<Json<UserRecord>, ProxyError> {
    let envelope = state.random_user_client.fetch_random_user().await?;

    let record = envelope
        .results
        .into_iter()
        .next()
        .ok_or(ProxyError::EmptyResult)?;

    Ok(Json(record))
}
