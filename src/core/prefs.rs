//! The lite-mode preference: where it comes from and how it is persisted.

use super::constants::{LOW_DEVICE_MEMORY_GB, LOW_HARDWARE_CONCURRENCY};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage refused access: {0}")]
    Access(String),
}

/// Key/value persistence for string preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `"1"` is on, `"0"` is off; anything else counts as no preference.
#[inline]
pub fn decode_stored(value: &str) -> Option<bool> {
    match value {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

#[inline]
pub fn encode_stored(enabled: bool) -> &'static str {
    if enabled {
        "1"
    } else {
        "0"
    }
}

/// Device hints that suggest turning decorative motion off.
/// Absent browser APIs are `None` / `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceSignals {
    pub reduced_motion: bool,
    pub save_data: bool,
    /// `navigator.deviceMemory`, GB
    pub device_memory: Option<f64>,
    /// `navigator.hardwareConcurrency`
    pub hardware_concurrency: Option<f64>,
}

impl DeviceSignals {
    pub fn suggests_lite(&self) -> bool {
        if self.reduced_motion || self.save_data {
            return true;
        }
        let low =
            |value: Option<f64>, limit: f64| matches!(value, Some(v) if v > 0.0 && v <= limit);
        low(self.device_memory, LOW_DEVICE_MEMORY_GB)
            || low(self.hardware_concurrency, LOW_HARDWARE_CONCURRENCY)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSource {
    Stored,
    Inferred,
    User,
}

/// Current lite-mode state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiteMode {
    enabled: bool,
    source: ModeSource,
}

impl LiteMode {
    /// Stored preference if there is a readable one, device inference otherwise.
    pub fn resolve(store: &dyn PreferenceStore, key: &str, signals: &DeviceSignals) -> Self {
        let stored = match store.load(key) {
            Ok(value) => value.as_deref().and_then(decode_stored),
            Err(e) => {
                log::debug!("[lite] ignoring stored preference: {}", e);
                None
            }
        };
        match stored {
            Some(enabled) => Self {
                enabled,
                source: ModeSource::Stored,
            },
            None => Self {
                enabled: signals.suggests_lite(),
                source: ModeSource::Inferred,
            },
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn source(&self) -> ModeSource {
        self.source
    }

    /// Flip the flag and persist it. A failed write keeps the new in-memory
    /// value. Returns the new state.
    pub fn toggle(&mut self, store: &dyn PreferenceStore, key: &str) -> bool {
        self.enabled = !self.enabled;
        self.source = ModeSource::User;
        if let Err(e) = store.save(key, encode_stored(self.enabled)) {
            log::debug!("[lite] preference not persisted: {}", e);
        }
        self.enabled
    }

    pub fn label(&self) -> &'static str {
        if self.enabled {
            "Lite: On"
        } else {
            "Lite: Off"
        }
    }
}
