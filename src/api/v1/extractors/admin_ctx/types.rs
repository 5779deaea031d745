/*
 * Responsibility
 * - Handler から見える「認証済み admin コンテキスト」の型
 * - admin gate が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - 検証・認可の判断は middleware/services 側の責務
 * - ここは「型（契約）」として固定化する
 */

use crate::services::auth::AdminClaims;

/// Context attached to a request that passed the admin gate.
///
/// Holds the decoded claims exactly as verified; `claims.is_admin` is
/// guaranteed `true` by the gate.
#[derive(Debug, Clone)]
pub struct AdminCtx {
    pub claims: AdminClaims,
}

impl AdminCtx {
    pub fn new(claims: AdminClaims) -> Self {
        Self { claims }
    }

    /// User id from the `sub` claim, when the issuer included one.
    pub fn user_id(&self) -> Option<&str> {
        self.claims.sub.as_deref()
    }
}
