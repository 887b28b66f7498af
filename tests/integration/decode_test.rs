//! Decoding files through the encoding fallback ladder.

use copy_cli::source::{read_file, Encoding, Ladder, SourceError, MAX_CONTENT_SIZE};
use tempfile::TempDir;

use crate::helpers::fixture;

#[test]
fn utf8_file_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let text = "naïve café — 日本語\n\ttabbed\r\n";
    let path = fixture(temp.path(), "utf8.txt", text.as_bytes());

    let decoded = read_file(&path, MAX_CONTENT_SIZE, &Ladder::default()).unwrap();

    assert_eq!(decoded.text(), text);
    assert_eq!(decoded.text().as_bytes(), text.as_bytes());
    assert_eq!(decoded.encoding(), Some(Encoding::Utf8));
}

#[test]
fn invalid_utf8_never_fails() {
    let temp = TempDir::new().unwrap();
    let samples: [&[u8]; 4] = [b"\xFF\xFE", b"\xC3", b"ok \xE9\xE8\xE0", b"\x80\x81\x82"];

    for (i, bytes) in samples.iter().enumerate() {
        let path = fixture(temp.path(), &format!("sample{}.txt", i), bytes);
        let decoded = read_file(&path, MAX_CONTENT_SIZE, &Ladder::default()).unwrap();
        assert_eq!(decoded.encoding(), Some(Encoding::Latin1));
        assert_eq!(decoded.text().chars().count(), bytes.len());
    }
}

#[test]
fn bom_file_is_byte_identical_utf8() {
    let temp = TempDir::new().unwrap();
    let bytes = b"\xEF\xBB\xBFheader,value\n";
    let path = fixture(temp.path(), "bom.txt", bytes);

    let decoded = read_file(&path, MAX_CONTENT_SIZE, &Ladder::default()).unwrap();

    assert_eq!(decoded.encoding(), Some(Encoding::Utf8));
    assert_eq!(decoded.text(), "\u{FEFF}header,value\n");
    assert_eq!(decoded.text().as_bytes(), bytes);
}

#[test]
fn utf8_sig_ladder_strips_bom() {
    let temp = TempDir::new().unwrap();
    let path = fixture(temp.path(), "bom.txt", b"\xEF\xBB\xBFheader,value\n");
    let ladder = Ladder::new(&[Encoding::Utf8Bom, Encoding::Latin1]).unwrap();

    let decoded = read_file(&path, MAX_CONTENT_SIZE, &ladder).unwrap();

    assert_eq!(decoded.text(), "header,value\n");
    assert_eq!(decoded.encoding(), Some(Encoding::Utf8Bom));
}

#[test]
fn zero_byte_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let path = fixture(temp.path(), "empty.dat", b"");

    let decoded = read_file(&path, MAX_CONTENT_SIZE, &Ladder::default()).unwrap();

    assert!(decoded.is_empty());
    assert_eq!(decoded.text(), "");
}

#[test]
fn configured_cp1252_ladder() {
    let temp = TempDir::new().unwrap();
    let path = fixture(temp.path(), "quotes.txt", b"\x93smart\x94");
    let ladder = Ladder::new(&[Encoding::Utf8, Encoding::Windows1252]).unwrap();

    let decoded = read_file(&path, MAX_CONTENT_SIZE, &ladder).unwrap();

    assert_eq!(decoded.text(), "\u{201C}smart\u{201D}");
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = fixture(temp.path(), "locked.txt", b"secret");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores file modes.
    if std::fs::read(&path).is_ok() {
        return;
    }

    let err = read_file(&path, MAX_CONTENT_SIZE, &Ladder::default()).unwrap_err();
    assert!(matches!(err, SourceError::PermissionDenied { .. }));
}
