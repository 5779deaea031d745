/*
 * Responsibility
 * - admin gate の背後にある handler
 * - GET /admin/me: 認証済み identity (decoded claims) をそのまま返す
 */
use axum::{Json, response::IntoResponse};

use crate::api::v1::extractors::AdminCtxExtractor;

/// Echo the authenticated admin identity.
///
/// The claims returned here are exactly what the gate decoded and attached;
/// nothing is recomputed per handler.
pub async fn me(AdminCtxExtractor(ctx): AdminCtxExtractor) -> impl IntoResponse {
    Json(ctx.claims)
}
