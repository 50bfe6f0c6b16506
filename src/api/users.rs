use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::fixed_users;

pub async fn list_users() -> impl IntoResponse {
    let users = fixed_users();
    tracing::debug!(count = users.len(), "listing users");
    (StatusCode::OK, Json(users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;

    async fn body_of(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_list_users_ok_json() {
        let response = list_users().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = body_of(response).await;
        assert_eq!(body, br#"[{"ID":1,"Name":"Alice"},{"ID":2,"Name":"Bob"}]"#);
    }

    #[tokio::test]
    async fn test_list_users_is_idempotent() {
        let first = body_of(list_users().await.into_response()).await;
        let second = body_of(list_users().await.into_response()).await;
        assert_eq!(first, second);
    }
}
