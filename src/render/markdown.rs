use pulldown_cmark::{Options, Parser, html};

/// Markdown text block to HTML. Raw HTML inside the source is passed through.
pub fn to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis_links_and_lists() {
        let html = to_html("**The Problem**\n\nSee [data](https://example.com).\n\n1. one\n2. two\n");
        assert!(html.contains("<strong>The Problem</strong>"));
        assert!(html.contains(r#"<a href="https://example.com">data</a>"#));
        assert!(html.contains("<ol>"));
    }
}
