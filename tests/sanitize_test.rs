use canvas_sanitizer::{sanitize, sanitize_with_options, Options};
use dom_query::Document;

fn sanitized(html: &str) -> String {
    match sanitize(html) {
        Ok(out) => out,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

const CANVAS_EXPORT: &str = r#"<h1 id='temp:C:ABC123'>参考リンク集</h1>
<div data-section-style='5' class="" style=""><ul id='temp:C:DEF456'><li id='temp:C:GHI789' class='' style='' value='1'><span id='temp:C:GHI789'><control data-remapped="true" id="temp:C:JKL012"><img src="https://slack-imgs.com/?..." alt="link" data-is-slack style="width: 18px; height: 18px">:link:</img></control> <a href="https://example.com/docs">ドキュメント</a></span>
<br/></li></ul></div>
<p class='embedded-file line'>File ID: F0AAK0CBLKW</p>
<div data-section-style='7'><ul><li class='checked' style=''><span>Done</span></li></ul></div>"#;

// === Concrete scenarios ===

#[test]
fn heading_loses_id_and_style() {
    assert_eq!(sanitized("<h1 id='x' style=''>Title</h1>"), "<h1>Title</h1>");
}

#[test]
fn checked_class_survives() {
    assert_eq!(
        sanitized("<li class='checked' style=''>Done</li>"),
        r#"<li class="checked">Done</li>"#
    );
}

#[test]
fn span_and_line_break_removed_from_list() {
    assert_eq!(
        sanitized("<ul><li><span>Item</span><br/></li></ul>"),
        "<ul><li>Item</li></ul>"
    );
}

#[test]
fn emoji_control_becomes_plain_token() {
    assert_eq!(
        sanitized(r#"<control><img data-is-slack alt="x">:wave:</img></control>"#),
        ":wave:"
    );
}

#[test]
fn empty_input_gives_empty_output() {
    assert_eq!(sanitize(""), Ok(String::new()));
}

// === Canvas export behaviour ===

#[test]
fn removes_id_and_style_attributes() {
    let out = sanitized(
        "<h1 id='temp:C:ABC123' style=''>タイトル</h1><p id='temp:C:DEF456' class='line' style=''>本文</p>",
    );
    assert_eq!(out, "<h1>タイトル</h1><p>本文</p>");
}

#[test]
fn preserves_href_on_links() {
    let out = sanitized(r#"<a href="https://example.com/" id="temp:C:XXX">リンクテキスト</a>"#);
    assert_eq!(out, r#"<a href="https://example.com/">リンクテキスト</a>"#);
}

#[test]
fn preserves_section_style_marker() {
    let out = sanitized(
        r#"<div data-section-style='7' class="" style=""><ul id='temp:C:AAA'><li>item</li></ul></div>"#,
    );
    assert_eq!(out, r#"<div data-section-style="7"><ul><li>item</li></ul></div>"#);
}

#[test]
fn unwraps_span_with_link_inside() {
    let out = sanitized(r#"<li><span>:miro: <a href="https://example.com">リンク</a></span></li>"#);
    assert_eq!(out, r#"<li>:miro: <a href="https://example.com">リンク</a></li>"#);
}

#[test]
fn converts_full_emoji_control() {
    let out = sanitized(
        r#"<control data-remapped="true" id="temp:C:XXX"><img src="https://..." alt="miro" data-is-slack style="...">:miro:</img></control>"#,
    );
    assert_eq!(out, ":miro:");
}

#[test]
fn preserves_embedded_file_class() {
    let out = sanitized(
        "<p class='embedded-file'>File ID: F0AAK0CBLKW File URL: https://xxx.slack.com/files/...</p>",
    );
    assert!(out.starts_with(r#"<p class="embedded-file">"#));
    assert!(out.contains("File ID: F0AAK0CBLKW"));
}

#[test]
fn preserves_text_formatting_tags() {
    let html = "<p><b>太字</b><i>斜体</i><u>下線</u><del>取り消し</del></p>";
    assert_eq!(sanitized(html), html);
}

#[test]
fn preserves_table_structure() {
    let out = sanitized("<table><tr><td><p>セル1</p></td><td><p>セル2</p></td></tr></table>");
    assert!(out.contains("<table>"));
    assert!(out.contains("<tr>"));
    assert!(out.contains("<td><p>セル1</p></td>"));
}

#[test]
fn complex_canvas_export() {
    let out = sanitized(CANVAS_EXPORT);

    assert!(out.contains("<h1>参考リンク集</h1>"));
    assert!(out.contains(r#"<div data-section-style="5">"#));
    assert!(out.contains(r#"<li>:link: <a href="https://example.com/docs">ドキュメント</a>"#));
    assert!(out.contains(r#"<p class="embedded-file">File ID: F0AAK0CBLKW</p>"#));
    assert!(out.contains(r#"<li class="checked">Done</li>"#));

    assert!(!out.contains("id="));
    assert!(!out.contains("style=\"\""));
    assert!(!out.contains(" style="));
    assert!(!out.contains("<br"));
    assert!(!out.contains("<control"));
    assert!(!out.contains("<img"));
    assert!(!out.contains("<span"));
}

#[test]
fn unknown_elements_are_kept() {
    assert_eq!(
        sanitized(r#"<section id="s"><custom-tag data-x="1">x</custom-tag></section>"#),
        "<section><custom-tag>x</custom-tag></section>"
    );
}

#[test]
fn namespaced_svg_link_is_not_taken_for_href() {
    let out = sanitized(r##"<p>x</p><svg><use xlink:href="#icon"></use></svg>"##);
    assert!(out.starts_with("<p>x</p><svg>"), "{out}");
    assert!(!out.contains("href"), "{out}");
}

#[test]
fn no_break_space_does_not_split_class_tokens() {
    assert_eq!(sanitized("<p class='checked\u{a0}x'>t</p>"), "<p>t</p>");
}

#[test]
fn emoji_token_is_kept_as_written() {
    assert_eq!(sanitized("<control><img data-is-slack>:a: extra</control>"), ":a: extra");
    assert_eq!(sanitized("<control><img data-is-slack>wave</control>"), "wave");
}

#[test]
fn script_and_style_are_dropped() {
    assert_eq!(
        sanitized("<p>a</p><script>alert(1)</script><style>p{}</style><p>b</p>"),
        "<p>a</p><p>b</p>"
    );
}

#[test]
fn text_is_escaped_on_output() {
    assert_eq!(sanitized("<p>5 &lt; 6 &amp; 7</p>"), "<p>5 &lt; 6 &amp; 7</p>");
}

#[test]
fn custom_policy_is_honoured() {
    let options = Options {
        allowed_classes: vec!["line".into()],
        unwrap_tags: Vec::new(),
        ..Options::default()
    };
    let out = sanitize_with_options("<p class='line checked'><span>x</span></p>", &options);
    assert_eq!(out, Ok(r#"<p class="line"><span>x</span></p>"#.to_string()));
}

// === Properties ===

#[test]
fn output_has_no_document_wrapper() {
    for html in ["<p>x</p>", "text only", "<li>a</li><li>b</li>", CANVAS_EXPORT] {
        let out = sanitized(html);
        assert!(!out.contains("<html"), "{out}");
        assert!(!out.contains("<head"), "{out}");
        assert!(!out.contains("<body"), "{out}");
    }
}

#[test]
fn output_attributes_are_whitelisted() {
    let inputs = [
        CANVAS_EXPORT,
        r#"<div id="a" style="b" value="c" class="checked x embedded-file"><img src="s" alt="a" data-is-slack></div>"#,
        r#"<ol start="3"><li value="7" class="x">one</li></ol>"#,
    ];

    for html in inputs {
        let out = sanitized(html);
        let doc = Document::from(out.as_str());
        for node in doc.select("body *").nodes() {
            for attr in node.attrs().iter() {
                let key = attr.name.local.to_string();
                match key.as_str() {
                    "href" | "data-section-style" => {}
                    "class" => {
                        for token in attr.value.split_whitespace() {
                            assert!(
                                token == "checked" || token == "embedded-file",
                                "unexpected class token {token} in {out}"
                            );
                        }
                    }
                    other => panic!("unexpected attribute {other} in {out}"),
                }
            }
        }
    }
}

#[test]
fn no_line_breaks_or_spans_survive() {
    let html = "<p>a<br>b<span>c<span>d<br/></span></span></p><span><span></span></span>";
    let out = sanitized(html);
    let doc = Document::from(out.as_str());
    assert!(doc.select("br").is_empty());
    assert!(doc.select("span").is_empty());
    assert_eq!(out, "<p>abcd</p>");
}

#[test]
fn sanitizing_twice_is_stable() {
    let once = sanitized(CANVAS_EXPORT);
    let twice = sanitized(&once);
    assert_eq!(once, twice);
}

#[test]
fn malformed_markup_is_recovered() {
    assert_eq!(sanitized("<p>text<div>more"), "<p>text</p><div>more</div>");
    assert_eq!(sanitized("<span>unclosed"), "unclosed");
}
