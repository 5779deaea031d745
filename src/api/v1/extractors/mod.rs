pub mod admin_ctx;

pub use admin_ctx::{AdminCtx, AdminCtxExtractor};
