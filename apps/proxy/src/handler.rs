//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `random_user`: ランダムユーザーの取得（randomuser.me のプロキシ）

pub mod health;
pub mod random_user;

pub use health::health_check;
pub use random_user::{RandomUserState, get_random_user};
