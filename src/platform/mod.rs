//! Platform abstraction layer
//!
//! Browser-only glue:
//! - DOM rendering and event wiring (`dom`)
//! - LocalStorage lives in `persistence::local`

#[cfg(target_arch = "wasm32")]
pub mod dom;
