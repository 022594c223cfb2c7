use eframe::egui;

/// Which fragment the active editor tab holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Html,
    Css,
    Js,
}

const COMMENT: egui::Color32 = egui::Color32::from_rgb(90, 120, 90);
const STRING: egui::Color32 = egui::Color32::from_rgb(206, 145, 120);
const TAG: egui::Color32 = egui::Color32::from_rgb(86, 156, 214);
const KEYWORD: egui::Color32 = egui::Color32::from_rgb(197, 134, 192);
const NUMBER: egui::Color32 = egui::Color32::from_rgb(181, 206, 168);
const PLAIN: egui::Color32 = egui::Color32::LIGHT_GRAY;

const JS_KEYWORDS: &[&str] = &[
    "function", "return", "const", "let", "var", "if", "else", "for", "while", "new", "class",
    "document", "window", "true", "false", "null", "undefined", "typeof", "this",
];

/// Best-effort token coloring for the code editor. Like the preview
/// composer, this never rejects input: unrecognized text falls through as
/// plain monospace.
pub(crate) fn highlight_code(job: &mut egui::text::LayoutJob, code: &str, lang: Language) {
    let font_id = egui::FontId::monospace(14.0);
    let mut idx = 0;

    while idx < code.len() {
        let rest = &code[idx..];
        let c = rest.chars().next().expect("idx is on a char boundary");

        // Comments
        if let Some(open) = comment_open(lang, rest) {
            let close = comment_close(lang, open);
            let end = match close {
                Some(close) => rest
                    .find(close)
                    .map(|p| idx + p + close.len())
                    .unwrap_or(code.len()),
                // Line comment runs to end of line.
                None => rest.find('\n').map(|p| idx + p).unwrap_or(code.len()),
            };
            append_text(job, &code[idx..end], &font_id, COMMENT);
            idx = end;
            continue;
        }

        // Strings
        if matches!(c, '"' | '\'') || (lang == Language::Js && c == '`') {
            let end = rest[c.len_utf8()..]
                .find(c)
                .map(|p| idx + c.len_utf8() + p + c.len_utf8())
                .unwrap_or(code.len());
            append_text(job, &code[idx..end], &font_id, STRING);
            idx = end;
            continue;
        }

        // HTML tags: color the whole <...> span
        if lang == Language::Html && c == '<' {
            let end = rest.find('>').map(|p| idx + p + 1).unwrap_or(code.len());
            append_text(job, &code[idx..end], &font_id, TAG);
            idx = end;
            continue;
        }

        // Numbers (trailing units like px/% are left plain)
        if c.is_ascii_digit() {
            let end = idx
                + rest
                    .find(|ch: char| !ch.is_ascii_digit() && ch != '.')
                    .unwrap_or(rest.len());
            append_text(job, &code[idx..end], &font_id, NUMBER);
            idx = end;
            continue;
        }

        // Identifiers: JS keywords get their own color
        if c.is_ascii_alphabetic() || c == '_' {
            let end = idx
                + rest
                    .find(|ch: char| !ch.is_ascii_alphanumeric() && ch != '_')
                    .unwrap_or(rest.len());
            let word = &code[idx..end];
            let color = if lang == Language::Js && JS_KEYWORDS.contains(&word) {
                KEYWORD
            } else {
                PLAIN
            };
            append_text(job, word, &font_id, color);
            idx = end;
            continue;
        }

        append_text(job, &code[idx..idx + c.len_utf8()], &font_id, PLAIN);
        idx += c.len_utf8();
    }
}

fn comment_open(lang: Language, rest: &str) -> Option<&'static str> {
    match lang {
        Language::Html if rest.starts_with("<!--") => Some("<!--"),
        Language::Css if rest.starts_with("/*") => Some("/*"),
        Language::Js if rest.starts_with("/*") => Some("/*"),
        Language::Js if rest.starts_with("//") => Some("//"),
        _ => None,
    }
}

fn comment_close(lang: Language, open: &str) -> Option<&'static str> {
    match (lang, open) {
        (Language::Html, _) => Some("-->"),
        (_, "/*") => Some("*/"),
        _ => None,
    }
}

fn append_text(
    job: &mut egui::text::LayoutJob,
    text: &str,
    font_id: &egui::FontId,
    color: egui::Color32,
) {
    job.append(
        text,
        0.0,
        egui::TextFormat {
            font_id: font_id.clone(),
            color,
            ..Default::default()
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_text(code: &str, lang: Language) -> String {
        let mut job = egui::text::LayoutJob::default();
        highlight_code(&mut job, code, lang);
        job.text.clone()
    }

    #[test]
    fn highlighting_preserves_every_input_character() {
        let html = "<head><!-- note --></head>\n<body class=\"x\">hi</body>";
        assert_eq!(job_text(html, Language::Html), html);

        let css = "/* c */ body { margin: 0; color: \"#fff\"; }";
        assert_eq!(job_text(css, Language::Css), css);

        let js = "// line\nconst x = `tpl ${1}`; /* block */ go(42);";
        assert_eq!(job_text(js, Language::Js), js);
    }

    #[test]
    fn unterminated_string_runs_to_end_without_panicking() {
        let js = "let s = \"oops";
        assert_eq!(job_text(js, Language::Js), js);
    }

    #[test]
    fn non_ascii_text_is_passed_through() {
        let html = "<p>Привіт, світ! 🌍</p>";
        assert_eq!(job_text(html, Language::Html), html);
    }
}
