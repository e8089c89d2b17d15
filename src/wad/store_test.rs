use super::{Category, Lump, LumpStore, WadKind};
use crate::error;

fn lump(name: &str, data: &[u8]) -> Lump {
    Lump::new(name, data, Category::Plain).unwrap()
}

#[test]
fn construct_lump() {
    let lump = Lump::new("trooa1", vec![1, 2, 3], Category::Sprite).unwrap();

    assert_eq!(lump.name(), "TROOA1");
    assert_eq!(lump.data(), [1, 2, 3]);
    assert_eq!(lump.size(), 3);
    assert_eq!(lump.category(), Category::Sprite);
}

#[test]
fn construct_lump_bad_name() {
    for name in ["", "NINECHARS", "NUL\0"] {
        let e = Lump::new(name, [0u8; 1], Category::Plain).unwrap_err();
        assert!(matches!(e, error::BinParse::InvalidName(_)));
    }
}

#[test]
fn construct_lump_marker_name() {
    for name in ["S_START", "s_end", "E1M1", "MAP07"] {
        let e = Lump::new(name, [0u8; 1], Category::Plain).unwrap_err();
        assert!(matches!(e, error::BinParse::InvalidName(_)));
    }
}

#[test]
fn lump_set_name() {
    let mut sound = lump("DSPLPAIN", &[1]);
    sound.set_name("dspistol").unwrap();
    assert_eq!(sound.name(), "DSPISTOL");

    assert!(sound.set_name("DSPISTOL2").is_err());
    assert_eq!(sound.name(), "DSPISTOL");
}

#[test]
fn lump_set_marker_name() {
    let mut sound = lump("DSPISTOL", &[1]);

    for name in ["S_START", "S_END", "E2M4", "MAP30"] {
        assert!(sound.set_name(name).is_err());
    }

    assert_eq!(sound.name(), "DSPISTOL");
}

#[test]
fn new_store_is_patch() {
    let store = LumpStore::new();
    assert_eq!(store.kind(), WadKind::Patch);
    assert!(store.is_empty());
}

#[test]
fn insert_and_get() {
    let mut store = LumpStore::new();
    assert!(store.insert(lump("PLAYPAL", &[1, 2, 3])).is_none());

    assert_eq!(store.len(), 1);
    assert!(store.contains("PLAYPAL"));
    assert!(store.contains("playpal"));
    assert_eq!(store.get("PlayPal").unwrap().data(), [1, 2, 3]);
    assert!(store.get("COLORMAP").is_none());
}

#[test]
fn insert_replaces_same_name() {
    let mut store = LumpStore::new();
    store.insert(lump("DSPISTOL", &[1]));
    store.insert(lump("DSSHOTGN", &[2]));

    let replaced = store.insert(lump("dspistol", &[9, 9])).unwrap();

    assert_eq!(replaced.data(), [1]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("DSPISTOL").unwrap().data(), [9, 9]);
}

#[test]
fn substitute_renamed_lump() {
    let mut store = LumpStore::new();
    store.insert(lump("DSPISTOL", &[1]));

    let mut substitute = lump("DSPLPAIN", &[7, 7, 7]);
    substitute.set_name("DSPISTOL").unwrap();
    store.insert(substitute);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("DSPISTOL").unwrap().data(), [7, 7, 7]);
}

#[test]
fn rename_lump() {
    let mut store = LumpStore::new();
    store.insert(lump("CHGGA0", &[1]));
    store.insert(lump("PISGA0", &[2]));

    let replaced = store.rename("CHGGA0", "pisga0").unwrap().unwrap();

    assert_eq!(replaced.data(), [2]);
    assert_eq!(store.len(), 1);
    assert!(!store.contains("CHGGA0"));
    assert_eq!(store.get("PISGA0").unwrap().name(), "PISGA0");
    assert_eq!(store.get("PISGA0").unwrap().data(), [1]);
}

#[test]
fn rename_missing_lump() {
    let mut store = LumpStore::new();
    store.insert(lump("PISGA0", &[2]));

    assert!(store.rename("CHGGA0", "PISGA0").unwrap().is_none());
    assert_eq!(store.get("PISGA0").unwrap().data(), [2]);
}

#[test]
fn rename_to_bad_name_keeps_lump() {
    let mut store = LumpStore::new();
    store.insert(lump("CHGGA0", &[1]));

    assert!(store.rename("CHGGA0", "MUCHTOOLONG").is_err());
    assert!(store.contains("CHGGA0"));
}

#[test]
fn rename_to_marker_name_keeps_lump() {
    let mut store = LumpStore::new();
    store.insert(lump("CHGGA0", &[1]));

    let e = store.rename("CHGGA0", "s_start").unwrap_err();

    assert!(matches!(e, error::BinParse::InvalidName(_)));
    assert!(store.contains("CHGGA0"));
    assert!(!store.contains("S_START"));
}

#[test]
fn remove_lump() {
    let mut store = LumpStore::new();
    store.insert(lump("ENDOOM", &[1]));

    assert_eq!(store.remove("endoom").unwrap().name(), "ENDOOM");
    assert!(store.remove("ENDOOM").is_none());
    assert!(store.is_empty());
}

#[test]
fn change_category_in_place() {
    let mut store = LumpStore::new();
    store.insert(lump("PISGA0", &[1]));
    store.get_mut("PISGA0").unwrap().set_category(Category::Sprite);

    assert_eq!(store.get("PISGA0").unwrap().category(), Category::Sprite);
}

#[test]
fn names_are_sorted() {
    let mut store = LumpStore::new();
    store.extend([
        lump("TROOA1", &[]),
        lump("COLORMAP", &[]),
        lump("PLAYPAL", &[]),
        lump("E1M1MUS", &[]),
    ]);

    let names: Vec<_> = store.names().collect();
    assert_eq!(names, ["COLORMAP", "E1M1MUS", "PLAYPAL", "TROOA1"]);

    let iterated: Vec<_> = (&store).into_iter().map(Lump::name).collect();
    assert_eq!(iterated, names);
}

#[test]
fn filter_by_category() {
    let mut store = LumpStore::with_kind(WadKind::Internal);
    store.insert(lump("PLAYPAL", &[]));
    store.insert(Lump::new("TROOB1", [0u8], Category::Sprite).unwrap());
    store.insert(Lump::new("TROOA1", [0u8], Category::Sprite).unwrap());

    let sprites: Vec<_> =
        store.by_category(Category::Sprite).map(Lump::name).collect();
    let plain: Vec<_> =
        store.by_category(Category::Plain).map(Lump::name).collect();

    assert_eq!(sprites, ["TROOA1", "TROOB1"]);
    assert_eq!(plain, ["PLAYPAL"]);
}
