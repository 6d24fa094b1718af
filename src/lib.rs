//! Client-side page effects for a static site, compiled to WebAssembly.
//!
//! `core` is plain Rust (smoothing, geometry, preference rules) and builds on
//! any target; the browser wiring below it only builds for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod chrome;
#[cfg(target_arch = "wasm32")]
mod controller;
#[cfg(target_arch = "wasm32")]
mod device;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod toggle;

#[cfg(target_arch = "wasm32")]
pub use app::{start, PageEffects};
