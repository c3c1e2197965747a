//! # Randomuser Proxy 共有ユーティリティ
//!
//! アプリケーション間で共通利用する型とロギング初期化を提供する。
//!
//! - `health`: ヘルスチェックのレスポンス型
//! - `observability`: トレーシング初期化と Request ID 生成

pub mod health;
pub mod observability;

pub use health::HealthResponse;
