use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::state::AppState;

use super::AdminCtx;

/// Handler で AdminCtx を受け取るための extractor
/// admin gate が AdminCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（gate がかかってない・ミドルウェア未設定）
pub struct AdminCtxExtractor(pub AdminCtx);

impl FromRequestParts<AppState> for AdminCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminCtx>()
            .cloned()
            .map(AdminCtxExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    use crate::services::auth::AdminClaims;

    fn admin_claims() -> AdminClaims {
        serde_json::from_value(serde_json::json!({"isAdmin": true, "sub": "u-1"})).unwrap()
    }

    #[tokio::test]
    async fn extracts_ctx_inserted_by_the_gate() {
        let mut req = Request::builder().body(()).unwrap();
        req.extensions_mut().insert(AdminCtx::new(admin_claims()));
        let (mut parts, _) = req.into_parts();

        let state = crate::state::AppState::new(std::sync::Arc::new(
            crate::services::auth::AdminTokenVerifier::new("s", 0),
        ));

        let AdminCtxExtractor(ctx) =
            AdminCtxExtractor::from_request_parts(&mut parts, &state)
                .await
                .unwrap();
        assert_eq!(ctx.user_id(), Some("u-1"));
    }

    #[tokio::test]
    async fn missing_ctx_is_rejected_with_401() {
        let req = Request::builder().body(()).unwrap();
        let (mut parts, _) = req.into_parts();

        let state = crate::state::AppState::new(std::sync::Arc::new(
            crate::services::auth::AdminTokenVerifier::new("s", 0),
        ));

        let rejection = AdminCtxExtractor::from_request_parts(&mut parts, &state)
            .await
            .err()
            .unwrap();
        assert_eq!(rejection, StatusCode::UNAUTHORIZED);
    }
}
