use checkoff::model::{CheckedOrder, Item, ReconcilePolicy, StoreSettings, WriteMode};
use checkoff::ops::ItemStore;
use checkoff::parse::{parse_items, serialize_items};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", name, e))
}

/// Helper: load a fixture file, parse it, serialize it, and assert byte-for-byte equality
fn assert_round_trip(fixture_name: &str) {
    let source = read_fixture(fixture_name);
    let parsed = parse_items(&source, CheckedOrder::Last);
    assert!(parsed.dropped.is_empty());
    let output = serialize_items(&parsed.items);

    assert_eq!(
        output, source,
        "Round-trip failed for fixture: {}",
        fixture_name
    );
}

// ============================================================================
// Parse → serialize
// ============================================================================

#[test]
fn round_trip_checklist() {
    assert_round_trip("checklist.txt");
}

#[test]
fn round_trip_unchecked_only() {
    assert_round_trip("unchecked_only.txt");
}

#[test]
fn round_trip_unicode() {
    assert_round_trip("unicode.txt");
}

#[test]
fn messy_file_normalizes() {
    let source = read_fixture("messy.txt");
    let parsed = parse_items(&source, CheckedOrder::Last);
    assert_eq!(parsed.dropped.len(), 2);
    assert_eq!(
        serialize_items(&parsed.items),
        read_fixture("messy_normalized.txt")
    );

    // The normalized form is a fixed point
    assert_round_trip("messy_normalized.txt");
}

#[test]
fn checked_first_layout() {
    let source = read_fixture("checklist.txt");
    let parsed = parse_items(&source, CheckedOrder::First);
    let output = serialize_items(&parsed.items);
    assert_eq!(
        output,
        " x bought milk\n x paid rent\n - call the plumber\n - renew passport\n - pick up dry cleaning\n"
    );
    // Reading the checked-first file back keeps the same layout
    assert_eq!(
        serialize_items(&parse_items(&output, CheckedOrder::First).items),
        output
    );
}

// ============================================================================
// Through the store
// ============================================================================

fn store_copy(fixture: &str, tmp: &tempfile::TempDir, settings: StoreSettings) -> ItemStore {
    let path = tmp.path().join("todo.txt");
    fs::copy(fixture_path(fixture), &path).unwrap();
    ItemStore::open(path, settings)
}

#[test]
fn store_save_is_byte_identical() {
    for write in [WriteMode::Atomic, WriteMode::Truncate] {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = StoreSettings {
            write,
            ..StoreSettings::default()
        };
        let mut store = store_copy("checklist.txt", &tmp, settings);
        assert!(store.save());
        let first = fs::read(store.path()).unwrap();
        assert!(store.save());
        let second = fs::read(store.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, read_fixture("checklist.txt").into_bytes());
    }
}

#[test]
fn store_edits_survive_reload() {
    for policy in [ReconcilePolicy::Incremental, ReconcilePolicy::Rebuild] {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = StoreSettings {
            policy,
            ..StoreSettings::default()
        };
        let mut store = store_copy("checklist.txt", &tmp, settings);

        store.add("water the plants");
        store.toggle(1).unwrap(); // call the plumber
        store.set_text(0, "water the ferns").unwrap();
        let expected = store.items().to_vec();

        let reopened = ItemStore::open(store.path().to_path_buf(), settings);
        assert_eq!(reopened.items(), expected.as_slice());
        assert_eq!(
            expected,
            vec![
                Item::unchecked("water the ferns"),
                Item::unchecked("renew passport"),
                Item::unchecked("pick up dry cleaning"),
                Item::checked("call the plumber"),
                Item::checked("bought milk"),
                Item::checked("paid rent"),
            ]
        );
    }
}
