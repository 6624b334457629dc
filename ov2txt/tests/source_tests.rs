use ov2txt::{ParseError, Source, Vec2i};
use std::io::Write;
use tempfile::NamedTempFile;

fn source_from_bytes(data: &[u8]) -> (NamedTempFile, Source) {
    let mut file = NamedTempFile::new().expect("TempFile");
    file.write_all(data).expect("Write");
    let source = Source::open(file.path()).expect("Open");
    (file, source)
}

#[test]
fn test_open_nonexistent() {
    let err = Source::open("path/to/nowhere.gfx").unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
    assert!(err.to_string().contains("path/to/nowhere.gfx"));
}

#[test]
fn test_open_reads_file() {
    let (file, mut src) = source_from_bytes(b"size = { x = 3 y = 4 }");
    assert_eq!(src.name(), file.path().display().to_string());
    assert_eq!(src.identifier().unwrap(), "size");
    src.expect_char('=').unwrap();
    assert_eq!(src.vec2i().unwrap(), Vec2i::new(3, 4));
    assert_eq!(src.peek(true), None);
}

#[test]
fn test_windows_1252_decoding() {
    // 0xE9 is 'é' in Windows-1252 and invalid on its own in UTF-8.
    let (_file, mut src) = source_from_bytes(b"name = \"Caf\xE9\"");
    src.identifier().unwrap();
    src.expect_char('=').unwrap();
    assert_eq!(src.string_literal().unwrap(), "Café");
}

#[test]
fn test_utf8_bom_is_sniffed() {
    let (_file, mut src) = source_from_bytes("\u{feff}name = \"Café\"".as_bytes());
    assert_eq!(src.identifier().unwrap(), "name");
    src.expect_char('=').unwrap();
    assert_eq!(src.string_literal().unwrap(), "Café");
}

#[test]
fn test_error_location_in_file() {
    let (file, mut src) = source_from_bytes(b"# header\n\nflag = maybe\n");
    src.identifier().unwrap();
    src.expect_char('=').unwrap();
    let err = src.bool_literal().unwrap_err();
    let expected = format!(
        "Syntax error in {}:3:7: Expected '0', '1', 'yes' or 'no', but got 'm'.",
        file.path().display()
    );
    assert_eq!(err.to_string(), expected);
}
