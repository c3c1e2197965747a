//! # Randomuser Proxy ライブラリ
//!
//! ランダムユーザー生成 API（randomuser.me）をプロキシする HTTP サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State の組み立てとルーター構築
//! - `client`: 外部 API クライアント（randomuser.me）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: ハンドラのエラー型と HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
