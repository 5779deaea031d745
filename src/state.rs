/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::AdminTokenVerifier;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<AdminTokenVerifier>,
}

impl AppState {
    pub fn new(auth: Arc<AdminTokenVerifier>) -> Self {
        Self { auth }
    }
}
