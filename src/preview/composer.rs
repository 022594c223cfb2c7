//! Splices independently edited markup/style/script fragments into one
//! renderable document. This is a blind textual splice, not a parser: the
//! fragments are trusted as-is because the result only ever reaches the
//! sandboxed preview surface.

/// Anchor before which the style fragment is spliced.
pub const HEAD_CLOSE: &str = "</head>";
/// Anchor before which the script fragment is spliced.
pub const BODY_CLOSE: &str = "</body>";

/// Compose a single document from the three source fragments.
///
/// `<style>{style}</style>` is inserted immediately before the first
/// occurrence of `</head>`, and `<script>{script}</script>` immediately
/// before the first occurrence of `</body>`. A missing anchor means that
/// insertion is silently skipped; the markup itself is otherwise preserved
/// verbatim. Pure: same inputs, same output.
pub fn compose(markup: &str, style: &str, script: &str) -> String {
    let styled = splice_before(markup, HEAD_CLOSE, &format!("<style>{style}</style>"));
    splice_before(&styled, BODY_CLOSE, &format!("<script>{script}</script>"))
}

/// Insert `fragment` in front of the first occurrence of `anchor`.
/// Returns the input unchanged when the anchor is absent.
fn splice_before(source: &str, anchor: &str, fragment: &str) -> String {
    match source.find(anchor) {
        Some(at) => {
            let mut out = String::with_capacity(source.len() + fragment.len());
            out.push_str(&source[..at]);
            out.push_str(fragment);
            out.push_str(&source[at..]);
            out
        }
        None => source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_style_and_script_before_their_anchors() {
        let out = compose(
            "<head></head><body></body>",
            "h1{color:red}",
            "console.log(1)",
        );
        assert_eq!(
            out,
            "<head><style>h1{color:red}</style></head>\
             <body><script>console.log(1)</script></body>"
        );
    }

    #[test]
    fn composing_twice_yields_identical_output() {
        let m = "<html><head><title>x</title></head><body><p>hi</p></body></html>";
        let a = compose(m, ".a{margin:0}", "let x = 1;");
        let b = compose(m, ".a{margin:0}", "let x = 1;");
        assert_eq!(a, b);
    }

    #[test]
    fn missing_head_anchor_skips_style_only() {
        let out = compose("<body></body>", "p{}", "go()");
        assert_eq!(out, "<body><script>go()</script></body>");
    }

    #[test]
    fn missing_body_anchor_skips_script_only() {
        let out = compose("<head></head>", "p{}", "go()");
        assert_eq!(out, "<head><style>p{}</style></head>");
    }

    #[test]
    fn both_anchors_missing_returns_markup_unchanged() {
        let out = compose("<div>plain</div>", "p{}", "go()");
        assert_eq!(out, "<div>plain</div>");
    }

    #[test]
    fn only_first_occurrence_of_each_anchor_is_used() {
        let out = compose("</head></head>", "s", "j");
        assert_eq!(out, "<style>s</style></head></head>");
    }

    #[test]
    fn surrounding_markup_is_preserved_verbatim() {
        let m = "<!DOCTYPE html>\n<head>\n  <meta charset=\"UTF-8\">\n</head>\n<body>\n  <h1>Hello</h1>\n</body>\n";
        let out = compose(m, "", "");
        assert!(out.starts_with("<!DOCTYPE html>\n<head>\n  <meta charset=\"UTF-8\">\n"));
        assert!(out.contains("<style></style></head>"));
        assert!(out.contains("<script></script></body>"));
        assert!(out.ends_with("</body>\n"));
    }

    #[test]
    fn empty_markup_stays_empty() {
        assert_eq!(compose("", "p{}", "go()"), "");
    }
}
