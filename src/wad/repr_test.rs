use super::repr::{Entry, Head, WadKind, ENTRY_SIZE, HEAD_SIZE};
use crate::error;

#[test]
fn construct_head() {
    let expected_count = 13;
    let expected_dir_offset = 43234;
    let head =
        Head::new(WadKind::Internal, expected_count, expected_dir_offset);
    assert_eq!(head.kind(), WadKind::Internal);
    assert_eq!(head.lump_count(), expected_count);
    assert_eq!(head.directory_offset(), expected_dir_offset);
}

#[test]
fn parse_good_head() {
    let expected_count: i32 = 37;
    let expected_dir_offset: i32 = 600;

    let cases = [(b"IWAD", WadKind::Internal), (b"PWAD", WadKind::Patch)];

    for (magic, kind) in cases {
        let mut bytes = [0; HEAD_SIZE];
        bytes[0..4].copy_from_slice(magic);
        bytes[4..8].copy_from_slice(&expected_count.to_le_bytes());
        bytes[8..12].copy_from_slice(&expected_dir_offset.to_le_bytes());

        let head: Head = bytes.try_into().unwrap();

        assert_eq!(head.kind(), kind);
        assert_eq!(head.lump_count(), expected_count);
        assert_eq!(head.directory_offset(), expected_dir_offset);
    }
}

#[test]
fn parse_bad_head() {
    for magic in [b"WAD2", b"iwad", b"PWAF", b"\0\0\0\0"] {
        let mut bytes = [0; HEAD_SIZE];
        bytes[0..4].copy_from_slice(magic);
        bytes[4..8].copy_from_slice(&1i32.to_le_bytes());
        bytes[8..12].copy_from_slice(&12i32.to_le_bytes());

        let err = Head::try_from(bytes).unwrap_err();

        match err {
            error::BinParse::InvalidMagic(found) => assert_eq!(&found, magic),
            _ => panic!("Incorrect error type"),
        }
    }
}

#[test]
fn write_head() {
    let head = Head::new(WadKind::Patch, 2, 0x0102);
    let mut bytes = Vec::new();
    head.write_to(&mut bytes).unwrap();

    assert_eq!(bytes, b"PWAD\x02\0\0\0\x02\x01\0\0");
}

#[test]
fn construct_entry() {
    let entry = Entry::new(200, 111, "trooa1").unwrap();

    assert_eq!(entry.name(), *b"TROOA1\0\0");
    assert_eq!(entry.offset(), 200);
    assert_eq!(entry.size(), 111);
    assert_eq!(entry.name_to_string(), "TROOA1");
}

#[test]
fn construct_entry_long_name() {
    let e = Entry::new(0, 0, "LONGNAME9").unwrap_err();
    assert!(matches!(e, error::BinParse::InvalidName(_)));
}

#[test]
fn parse_good_entry() {
    let expected_offset: i32 = 20049;
    let expected_size: i32 = 3001;

    let mut bytes = [0; ENTRY_SIZE];
    bytes[0..4].copy_from_slice(&expected_offset.to_le_bytes());
    bytes[4..8].copy_from_slice(&expected_size.to_le_bytes());
    bytes[8..].copy_from_slice(b"PLAYPAL\0");

    let entry = Entry::from(bytes);

    assert_eq!(entry.name(), *b"PLAYPAL\0");
    assert_eq!(entry.offset(), expected_offset);
    assert_eq!(entry.size(), expected_size);
    assert_eq!(entry.name_to_string(), "PLAYPAL");
}

#[test]
fn parse_negative_entry() {
    let mut bytes = [0; ENTRY_SIZE];
    bytes[0..4].copy_from_slice(&(-1i32).to_le_bytes());
    bytes[4..8].copy_from_slice(&(-16i32).to_le_bytes());
    bytes[8..].copy_from_slice(b"BAD\0\0\0\0\0");

    let entry = Entry::from(bytes);

    assert_eq!(entry.offset(), -1);
    assert_eq!(entry.size(), -16);
}

#[test]
fn write_entry() {
    let entry = Entry::new(12, 768, "PLAYPAL").unwrap();
    let mut bytes = Vec::new();
    entry.write_to(&mut bytes).unwrap();

    assert_eq!(bytes.len(), ENTRY_SIZE);
    let bytes = <[u8; ENTRY_SIZE]>::try_from(bytes).unwrap();
    assert_eq!(Entry::from(bytes), entry);
}
