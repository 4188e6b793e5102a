//! Turning an uploaded file into a title and body.

use std::path::Path;

use pulldown_cmark::{Options, Parser, html};

use folio_markup::html::{first_h1, main_or_body, remove_scripts, text_content};

/// How a file's content is interpreted, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Markdown,
    Html,
    PlainText,
}

impl SourceFormat {
    /// `.md` is markdown, `.html` is HTML, anything else is plain text.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some("md") => Self::Markdown,
            Some("html") => Self::Html,
            _ => Self::PlainText,
        }
    }
}

/// Title and body extracted from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub title: String,
    pub content: String,
}

/// Title derived from a file name: extension dropped, `_` and `-` turned
/// into spaces, each word capitalised.
#[must_use]
pub fn file_name_to_title(name: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    stem.split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn markdown_to_html(source: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(source, options));
    out
}

/// Extract the title and body of `source` according to its format.
#[must_use]
pub fn extract(file_name: &str, source: &str, format: SourceFormat) -> Extracted {
    let fallback = || file_name_to_title(file_name);
    let (title, content) = match format {
        SourceFormat::Markdown => {
            let rendered = markdown_to_html(source);
            (first_h1(&rendered).unwrap_or_else(fallback), rendered)
        }
        SourceFormat::Html => (
            first_h1(source).unwrap_or_else(fallback),
            main_or_body(source).unwrap_or_else(|| source.to_string()),
        ),
        SourceFormat::PlainText => (fallback(), source.to_string()),
    };
    Extracted {
        title: text_content(&title),
        content: remove_scripts(&content),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("getting_started.md", "Getting Started")]
    #[case("api-keys.txt", "Api Keys")]
    #[case("faq", "Faq")]
    #[case("dir/über_uns.html", "Über Uns")]
    fn titles_from_file_names(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(file_name_to_title(name), expected);
    }

    #[rstest]
    #[case("a.md", SourceFormat::Markdown)]
    #[case("a.html", SourceFormat::Html)]
    #[case("a.txt", SourceFormat::PlainText)]
    #[case("a.rst", SourceFormat::PlainText)]
    fn format_by_extension(#[case] name: &str, #[case] expected: SourceFormat) {
        assert_eq!(SourceFormat::from_file_name(name), expected);
    }

    #[test]
    fn markdown_title_comes_from_first_heading() {
        let out = extract("notes.md", "# Install *Folio*\n\nRun it.\n", SourceFormat::Markdown);
        assert_eq!(out.title, "Install Folio");
        assert!(out.content.contains("<p>Run it.</p>"));
    }

    #[test]
    fn markdown_without_heading_uses_file_name() {
        let out = extract("quick_tour.md", "Just text.", SourceFormat::Markdown);
        assert_eq!(out.title, "Quick Tour");
    }

    #[test]
    fn html_prefers_main_region() {
        let page = "<html><body><nav>menu</nav><main><h1>Guide</h1><p>Body</p></main></body></html>";
        let out = extract("guide.html", page, SourceFormat::Html);
        assert_eq!(out.title, "Guide");
        assert_eq!(out.content, "<h1>Guide</h1><p>Body</p>");
    }

    #[test]
    fn html_falls_back_to_body() {
        let page = "<html><body><p>Only body</p><script>x()</script></body></html>";
        let out = extract("only-body.html", page, SourceFormat::Html);
        assert_eq!(out.title, "Only Body");
        assert_eq!(out.content, "<p>Only body</p>");
    }

    #[test]
    fn plain_text_is_kept_verbatim() {
        let out = extract("readme.txt", "# not a heading\n", SourceFormat::PlainText);
        assert_eq!(out.title, "Readme");
        assert_eq!(out.content, "# not a heading\n");
    }
}
