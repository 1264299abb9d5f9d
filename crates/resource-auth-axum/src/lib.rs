//! Axum adapter for `resource-auth-core`: trait impls plus a
//! `middleware::from_fn_with_state` layer, grounded on
//! `rs/src/middleware/auth/access.rs`.

mod adapter;
mod middleware;
mod replay;

pub use adapter::{AxumTokenRequest, AxumTokenResponse};
pub use middleware::{apply, apply_with_replay_store};
pub use replay::{ReplayError, ReplayStore};
