/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 */
pub mod admin_gate;
pub mod cors;
pub mod http;
pub mod security_headers;
