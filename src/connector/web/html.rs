//! Minimal HTML page builder.
//!
//! Every `&str` argument is escaped before it is written. Only `&'static str`
//! markup compiled into the binary can be inserted verbatim, so neither a
//! user's prompt nor a model's answer can inject markup into a page.

use axum::response::{Html, IntoResponse, Response};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    body: String,
}

impl Page {
    pub fn new(title: &str) -> Self {
        Self {
            title: escape(title),
            body: String::new(),
        }
    }

    pub fn heading(mut self, text: &str) -> Self {
        self.body.push_str(&format!("<h1>{}</h1>\n", escape(text)));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.body.push_str(&escape(text));
        self.body.push('\n');
        self
    }

    pub fn link(mut self, href: &'static str, text: &str) -> Self {
        self.body
            .push_str(&format!("<a href=\"{}\">{}</a>\n", href, escape(text)));
        self
    }

    /// `<div>` container; whitespace collapses as usual.
    pub fn block(mut self, style: &'static str, text: &str) -> Self {
        self.body
            .push_str(&format!("<div style=\"{}\">{}</div>\n", style, escape(text)));
        self
    }

    /// `<pre>` container; whitespace and line breaks are kept.
    pub fn preformatted(mut self, style: &'static str, text: &str) -> Self {
        self.body
            .push_str(&format!("<pre style=\"{}\">{}</pre>\n", style, escape(text)));
        self
    }

    /// Insert trusted markup verbatim.
    pub fn markup(mut self, html: &'static str) -> Self {
        self.body.push_str(html);
        self.body.push('\n');
        self
    }

    pub fn render(&self) -> String {
        format!(
            concat!(
                "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n",
                "<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n"
            ),
            self.title, self.body
        )
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#x27;y&#x27;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_dynamic_text_is_escaped_everywhere() {
        let page = Page::new("<t>")
            .heading("<h>")
            .text("<p>")
            .block("color:red", "<b>")
            .preformatted("color:red", "<i>")
            .link("/", "<a>");
        let html = page.render();

        assert!(html.contains("<title>&lt;t&gt;</title>"));
        assert!(html.contains("<h1>&lt;h&gt;</h1>"));
        assert!(html.contains("<div style=\"color:red\">&lt;b&gt;</div>"));
        assert!(html.contains("<pre style=\"color:red\">&lt;i&gt;</pre>"));
        assert!(html.contains("<a href=\"/\">&lt;a&gt;</a>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_preformatted_keeps_whitespace() {
        let html = Page::new("t").preformatted("", "a\n  b").render();
        assert!(html.contains("<pre style=\"\">a\n  b</pre>"));
    }

    #[test]
    fn test_markup_is_inserted_verbatim() {
        let html = Page::new("t").markup("<hr>").render();
        assert!(html.contains("<hr>\n"));
    }
}
