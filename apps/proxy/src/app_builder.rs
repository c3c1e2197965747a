//! # アプリケーション構築
//!
//! State を受け取り、ルーターを組み立てる。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use randomuser_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{RandomUserState, get_random_user, health_check};

/// ルーターを構築する
///
/// テストではスタブクライアントを持つ `RandomUserState` を渡して使う。
pub fn build_app(random_user_state: Arc<RandomUserState>) -> Router {
    // レイヤー順序: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
    // 2. TraceLayer: スパンに request_id を含める
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/users/random", get(get_random_user))
        .with_state(random_user_state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
