use crate::document::HtmlDocument;

const DARK_CLASSES: [&str; 5] = ["dark", "dark-mode", "night-mode", "theme-dark", "dark-theme"];
const THEME_ATTRIBUTES: [&str; 4] = ["data-theme", "data-mode", "data-color-scheme", "color-scheme"];

/// Attributes of `<html>` and `<body>` whose changes can flip the theme.
pub const THEME_TRIGGERS: [&str; 6] = [
    "class",
    "style",
    "data-theme",
    "data-mode",
    "data-color-scheme",
    "color-scheme",
];

/// Whether the page renders in a dark theme, judged from the classes,
/// theme attributes and inline `color-scheme` of `<html>` and `<body>`.
pub fn detect_dark_mode(doc: &HtmlDocument) -> bool {
    let mut candidates = vec![doc.document_element()];
    candidates.extend(doc.body());

    candidates.into_iter().any(|node| {
        DARK_CLASSES.iter().any(|class| doc.has_class(node, class))
            || THEME_ATTRIBUTES
                .iter()
                .filter_map(|attr| doc.attr(node, attr))
                .any(|value| value.trim().eq_ignore_ascii_case("dark"))
            || doc
                .style_property(node, "color-scheme")
                .is_some_and(|value| value.split_whitespace().next() == Some("dark"))
    })
}

#[cfg(test)]
mod tests {
    use super::detect_dark_mode;
    use crate::document::HtmlDocument;

    #[test]
    fn light_by_default() {
        let doc = HtmlDocument::parse("<html><body><main></main></body></html>");
        assert!(!detect_dark_mode(&doc));
    }

    #[test]
    fn class_attribute_or_style_marks_dark() {
        for page in [
            r#"<html class="dark"><body></body></html>"#,
            r#"<html><body class="app night-mode"></body></html>"#,
            r#"<html data-theme="Dark"><body></body></html>"#,
            r#"<html style="color-scheme: dark"><body></body></html>"#,
        ] {
            assert!(detect_dark_mode(&HtmlDocument::parse(page)), "{page}");
        }
    }
}
