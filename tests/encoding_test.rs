use canvas_sanitizer::{sanitize_bytes, Error};

#[test]
fn utf8_content_handled_correctly() {
    let html = "<h1 id='a'>Test</h1><p>é, ñ, ü, 中文, タイトル</p>".as_bytes();
    let out = sanitize_bytes(html).expect("sanitize failed");
    assert_eq!(out, "<h1>Test</h1><p>é, ñ, ü, 中文, タイトル</p>");
}

#[test]
fn iso88591_converted_to_utf8() {
    // é = 0xE9, ñ = 0xF1 in ISO-8859-1
    let html = b"<html><head><meta charset=\"ISO-8859-1\"></head>\
        <body><p>Caf\xE9 espa\xF1ol</p></body></html>";
    assert_eq!(sanitize_bytes(html).expect("sanitize failed"), "<p>Café español</p>");
}

#[test]
fn shift_jis_declared_by_content_type() {
    // "テスト" in Shift_JIS
    let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=Shift_JIS\">\
        <p>\x83\x65\x83\x58\x83\x67</p>";
    assert_eq!(sanitize_bytes(html).expect("sanitize failed"), "<p>テスト</p>");
}

#[test]
fn utf8_bom_is_not_part_of_output() {
    let mut html = vec![0xEF, 0xBB, 0xBF];
    html.extend_from_slice(b"<p>x</p>");
    assert_eq!(sanitize_bytes(&html).expect("sanitize failed"), "<p>x</p>");
}

#[test]
fn invalid_bytes_are_a_parse_error() {
    let result = sanitize_bytes(b"<p>Test \xFF\xFE Invalid</p>");
    match result {
        Err(Error::ParseError(msg)) => assert!(msg.contains("UTF-8")),
        other => panic!("expected Err(ParseError), got {other:?}"),
    }
}

#[test]
fn empty_bytes_give_empty_output() {
    assert_eq!(sanitize_bytes(b""), Ok(String::new()));
}
