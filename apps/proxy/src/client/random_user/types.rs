//! randomuser.me のレスポンス型

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// randomuser.me のレスポンス全体（エンベロープ）
///
/// `results` はプロバイダの仕様上 0 件の場合がある。
/// 利用側はインデックスアクセスの前に件数を確認すること。
///
/// `info`（seed, results, page, version）はプロバイダのメタデータで、
/// 型を固定せずに保持する。中身が変わってもレコードの取得は妨げない。
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub results: Vec<UserRecord>,
    #[serde(default)]
    pub info: Option<serde_json::Value>,
}

impl UserEnvelope {
    /// メタデータの `seed` を文字列として読めた場合に返す（ログ出力用）
    pub fn seed(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|info| info.get("seed"))
            .and_then(serde_json::Value::as_str)
    }
}

/// ユーザーレコード
///
/// プロバイダが定義する構造（name, location, email など）は解釈しない。
/// 受け取った JSON をそのまま保持し、シリアライズ時にも同じバイト列を出力する。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Box<RawValue>);

impl UserRecord {
    /// JSON 文字列からレコードを作成する
    ///
    /// 文字列が JSON として不正な場合はエラーを返す。
    pub fn from_json(json: impl Into<String>) -> Result<Self, serde_json::Error> {
        RawValue::from_string(json.into()).map(Self)
    }

    /// 保持している JSON 文字列を返す
    pub fn as_json(&self) -> &str {
        self.0.get()
    }
}
