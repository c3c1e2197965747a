//! # Randomuser Proxy サーバー
//!
//! ランダムユーザー生成 API（randomuser.me）をプロキシする HTTP サーバー。
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │    Client    │────▶│    Proxy     │────▶│ randomuser.me│
//! │              │     │  port: 8080  │     │              │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! 一覧は [`randomuser_proxy::config`] を参照。ログは `RUST_LOG` と `LOG_FORMAT` で制御する。
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p randomuser-proxy
//!
//! PROXY_PORT=3000 LOG_FORMAT=json cargo run -p randomuser-proxy --release
//! ```

use std::sync::Arc;

use randomuser_proxy::{
    app_builder::build_app,
    client::RandomUserClientImpl,
    config::ProxyConfig,
    handler::RandomUserState,
};
use randomuser_shared::observability::{LogFormat, init_tracing};
use tokio::net::TcpListener;

/// サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. 設定の読み込みとクライアントの構築
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env());
    let _tracing_guard = tracing::info_span!("app", service = "randomuser-proxy").entered();

    let config = ProxyConfig::from_env()?;

    tracing::info!(
        upstream = %config.random_user_url,
        timeout_secs = config.timeout.as_secs(),
        "Randomuser Proxy サーバーを起動します: {}",
        config.socket_addr()
    );

    // クライアントは起動時に 1 つだけ作成し、State 経由で全リクエストに共有する
    let random_user_client = RandomUserClientImpl::new(&config.random_user_url, config.timeout)?;
    let random_user_state = Arc::new(RandomUserState {
        random_user_client: Arc::new(random_user_client),
    });

    let app = build_app(random_user_state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Randomuser Proxy サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Randomuser Proxy サーバーを停止しました");

    Ok(())
}

/// Ctrl+C を待つ
///
/// シグナルハンドラを登録できない場合は停止要求を受け付けずに動き続ける。
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("シグナルハンドラの登録に失敗しました: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("停止シグナルを受信しました");
}
