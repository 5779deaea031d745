/*
 * Responsibility
 * - Bearer トークンの検証 (ヘッダ抽出 → 検証 → admin 判定)
 * - 成功時に AdminCtx を request extensions に載せる
 * - 拒否は三種類のみ: no token / authentication failed / admin required
 */
//! Admin gate: authorizes administrative access to the routes it wraps.
//!
//! Each request is evaluated independently, in order:
//! extraction → verification → authorization → forward (or reject).
//! Any failure short-circuits with the matching `AppError`; the wrapped
//! handler is never called on a rejection.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AdminCtx;
use crate::error::AppError;
use crate::services::auth::AdminJwtError;
use crate::state::AppState;

/// Wrap `router` with the admin gate.
///
/// 例：
/// ```ignore
/// let admin = middleware::admin_gate::apply(api::v1::admin_routes(), state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, admin_gate))
}

async fn admin_gate(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()) else {
        return Err(AppError::NoToken);
    };

    let claims = match state.auth.verify(token) {
        Ok(claims) => claims,
        Err(AdminJwtError::Expired) => {
            // Same client-visible outcome as any other verification failure;
            // logged separately for observability.
            tracing::warn!("admin token expired");
            return Err(AppError::AuthenticationFailed);
        }
        Err(err) => {
            tracing::warn!(error = %err, "admin token verification failed");
            return Err(AppError::AuthenticationFailed);
        }
    };

    if !claims.is_admin {
        tracing::warn!(sub = ?claims.sub, "verified token without admin rights");
        return Err(AppError::AdminRequired);
    }

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AdminCtx::new(claims));

    Ok(next.run(req).await)
}

/// Pull the credential out of the `Authorization` header.
///
/// The `"Bearer "` prefix is optional; a header that is empty after
/// stripping it (including exactly `"Bearer "`) counts as no credential.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value);

    if token.is_empty() { None } else { Some(token) }
}
