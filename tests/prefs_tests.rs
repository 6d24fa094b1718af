// Host-side tests for lite-mode resolution and persistence.

use page_fx::core::constants::LITE_STORAGE_KEY;
use page_fx::core::prefs::*;

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Access("SecurityError".into()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

fn stored(store: &MemoryStore) -> Option<String> {
    store.load(LITE_STORAGE_KEY).unwrap()
}

#[test]
fn stored_values_decode() {
    assert_eq!(decode_stored("1"), Some(true));
    assert_eq!(decode_stored("0"), Some(false));
    assert_eq!(decode_stored("true"), None);
    assert_eq!(decode_stored(""), None);
    assert_eq!(encode_stored(true), "1");
    assert_eq!(encode_stored(false), "0");
}

#[test]
fn stored_preference_wins_over_device_signals() {
    let store = MemoryStore::with(LITE_STORAGE_KEY, "0");
    let signals = DeviceSignals {
        reduced_motion: true,
        ..Default::default()
    };
    let mode = LiteMode::resolve(&store, LITE_STORAGE_KEY, &signals);
    assert!(!mode.enabled());
    assert_eq!(mode.source(), ModeSource::Stored);
}

#[test]
fn missing_or_garbage_preference_falls_back_to_inference() {
    let signals = DeviceSignals {
        hardware_concurrency: Some(2.0),
        ..Default::default()
    };
    let empty = MemoryStore::default();
    let mode = LiteMode::resolve(&empty, LITE_STORAGE_KEY, &signals);
    assert!(mode.enabled());
    assert_eq!(mode.source(), ModeSource::Inferred);

    let garbage = MemoryStore::with(LITE_STORAGE_KEY, "maybe");
    let mode = LiteMode::resolve(&garbage, LITE_STORAGE_KEY, &DeviceSignals::default());
    assert!(!mode.enabled());
    assert_eq!(mode.source(), ModeSource::Inferred);
}

#[test]
fn storage_failures_read_as_no_preference() {
    let mode = LiteMode::resolve(&BrokenStore, LITE_STORAGE_KEY, &DeviceSignals::default());
    assert!(!mode.enabled());
    assert_eq!(mode.source(), ModeSource::Inferred);

    let mut mode = mode;
    assert!(mode.toggle(&BrokenStore, LITE_STORAGE_KEY));
    assert!(mode.enabled());
}

#[test]
fn toggling_twice_restores_persisted_value() {
    for initial in ["1", "0"] {
        let store = MemoryStore::with(LITE_STORAGE_KEY, initial);
        let mut mode = LiteMode::resolve(&store, LITE_STORAGE_KEY, &DeviceSignals::default());

        let flipped = mode.toggle(&store, LITE_STORAGE_KEY);
        assert_eq!(stored(&store).as_deref(), Some(encode_stored(flipped)));
        assert_ne!(stored(&store).as_deref(), Some(initial));

        mode.toggle(&store, LITE_STORAGE_KEY);
        assert_eq!(stored(&store).as_deref(), Some(initial));
        assert_eq!(mode.source(), ModeSource::User);
    }
}

#[test]
fn toggle_labels() {
    let store = MemoryStore::with(LITE_STORAGE_KEY, "1");
    let mut mode = LiteMode::resolve(&store, LITE_STORAGE_KEY, &DeviceSignals::default());
    assert_eq!(mode.label(), "Lite: On");
    mode.toggle(&store, LITE_STORAGE_KEY);
    assert_eq!(mode.label(), "Lite: Off");
}

#[test]
fn device_signals_inference() {
    assert!(!DeviceSignals::default().suggests_lite());

    let reduced = DeviceSignals {
        reduced_motion: true,
        ..Default::default()
    };
    assert!(reduced.suggests_lite());

    let save_data = DeviceSignals {
        save_data: true,
        ..Default::default()
    };
    assert!(save_data.suggests_lite());

    let low_memory = DeviceSignals {
        device_memory: Some(4.0),
        ..Default::default()
    };
    assert!(low_memory.suggests_lite());

    let roomy = DeviceSignals {
        device_memory: Some(8.0),
        hardware_concurrency: Some(8.0),
        ..Default::default()
    };
    assert!(!roomy.suggests_lite());

    // zero means the browser did not report a value
    let unreported = DeviceSignals {
        device_memory: Some(0.0),
        hardware_concurrency: Some(0.0),
        ..Default::default()
    };
    assert!(!unreported.suggests_lite());
}
