use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let html = to_html("# Welding\n\nUse *argon*.");
    assert!(html.contains("<h1>Welding</h1>"));
    assert!(html.contains("<em>argon</em>"));
}

#[test]
fn escapes_raw_html() {
    let html = to_html("hi <script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn renders_tables() {
    let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<table>"));
}
