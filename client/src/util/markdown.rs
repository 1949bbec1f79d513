//! Markdown rendering for blog paragraph previews.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render markdown to HTML with raw HTML stripped.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Blog bodies are author-supplied; drop inline/block raw HTML before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis() {
        assert_eq!(render_markdown_html("Read *daily*."), "<p>Read <em>daily</em>.</p>\n");
    }

    #[test]
    fn strips_raw_html() {
        let out = render_markdown_html("hello <script>alert(1)</script>");
        assert!(!out.contains("<script>"));
    }
}
