/*
 * Responsibility
 * - 認証系サービスの公開インターフェース (re-export)
 * - HTTP には依存しない。middleware / handler から使われる側
 */
pub mod admin_jwt;

pub use admin_jwt::{AdminClaims, AdminJwtError, AdminTokenVerifier};
