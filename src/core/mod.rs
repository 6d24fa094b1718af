pub mod config;
pub mod constants;
pub mod gesture;
pub mod lifecycle;
pub mod links;
pub mod motion;
pub mod prefs;
pub mod reveal;
pub mod scroll;
pub mod smoothing;

pub use config::FxConfig;
pub use lifecycle::{AttachLease, FrameToken};
pub use prefs::{DeviceSignals, LiteMode, PreferenceStore, StoreError};
pub use smoothing::{Damped, MotionPolicy};
