//! randomuser.me レスポンスのハンドリング

use super::{error::RandomUserError, types::UserEnvelope};

/// randomuser.me レスポンスを検証してエンベロープに変換する
///
/// ステータスが 200 の場合のみボディを読み込み、`UserEnvelope` にデシリアライズする。
/// それ以外のステータスはボディを読まずに `UpstreamStatus` を返す。
pub(super) async fn handle_response(
    response: reqwest::Response,
) -> Result<UserEnvelope, RandomUserError> {
    let status = response.status();

    if status != reqwest::StatusCode::OK {
        return Err(RandomUserError::UpstreamStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    let envelope = serde_json::from_slice::<UserEnvelope>(&body)?;

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// テスト用の HTTP レスポンスを構築する
    fn make_response(status: u16, body: &str) -> reqwest::Response {
        let http_resp = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body.to_string())
            .unwrap();
        reqwest::Response::from(http_resp)
    }

    #[tokio::test]
    async fn test_成功レスポンスをデシリアライズする() {
        let response = make_response(
            200,
            r#"{"results":[{"name":{"first":"Jane"}}],"info":{"seed":"abc"}}"#,
        );

        let envelope = handle_response(response).await.unwrap();

        assert_eq!(envelope.results.len(), 1);
        assert_eq!(envelope.results[0].as_json(), r#"{"name":{"first":"Jane"}}"#);
        assert_eq!(envelope.seed(), Some("abc"));
    }

    #[tokio::test]
    async fn test_結果0件のレスポンスもエラーにしない() {
        let response = make_response(200, r#"{"results":[]}"#);

        let envelope = handle_response(response).await.unwrap();

        assert!(envelope.results.is_empty());
    }

    #[rstest]
    #[case(404)]
    #[case(500)]
    #[case(503)]
    #[case(201)]
    #[case(204)]
    #[tokio::test]
    async fn test_200以外はupstream_statusを返す(#[case] status: u16) {
        let response = make_response(status, r#"{"results":[{"name":{"first":"Jane"}}]}"#);

        let result = handle_response(response).await;

        assert_eq!(result.unwrap_err(), RandomUserError::UpstreamStatus(status));
    }

    #[tokio::test]
    async fn test_不正なjsonでdecodeエラーを返す() {
        let response = make_response(200, "not json");

        let result = handle_response(response).await;

        assert!(matches!(result, Err(RandomUserError::Decode(_))));
    }

    #[tokio::test]
    async fn test_resultsが配列でないとdecodeエラーを返す() {
        let response = make_response(200, r#"{"results":{"name":"Jane"}}"#);

        let result = handle_response(response).await;

        assert!(matches!(result, Err(RandomUserError::Decode(_))));
    }
}
