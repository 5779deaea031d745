/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - admin gate が必要な範囲 (admin_routes) とそれ以外を分ける
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{admin::me, health::health};

/// Routes reachable without a credential.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Routes that sit behind the admin gate.
///
/// The gate is applied by the caller (see `app::build_router`), so these
/// handlers can assume `AdminCtx` is present in request extensions.
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/me", get(me))
}
