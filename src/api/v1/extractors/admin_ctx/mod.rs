/*!
 * Admin identity extractor
 *
 * Responsibility:
 * - 認証済みリクエストのコンテキスト（AdminCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AdminCtx
 * - AdminCtxExtractor
 */

mod core;
mod types;

pub use core::AdminCtxExtractor;
pub use types::AdminCtx;
