//! Article Body Rendering
//!
//! Blog content is markdown with inline HTML allowed. Extends
//! pulldown-cmark with:
//! - relative image paths resolved under the gallery's image directory
//! - lazy loading on inline images
//! - script elements and `on*` handler attributes dropped

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

use crate::view::image_url;

/// Render an article body to HTML
pub fn render_article(text: &str, image_base: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser, image_base);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn transform_events<'a>(parser: Parser<'a>, image_base: &str) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut raw = RawHtml::default();
    for event in parser {
        if raw.in_script {
            // Inline scripts arrive as tag, text, tag; block structure is kept
            let structural = matches!(event, Event::Start(_) | Event::End(_));
            if let Event::Html(html) | Event::InlineHtml(html) = &event {
                raw.track_script(html);
            }
            if structural {
                events.push(event);
            }
            continue;
        }
        match event {
            Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
                let url = image_url(image_base, &dest_url);
                events.push(Event::Start(Tag::Image {
                    link_type,
                    dest_url: CowStr::from(url),
                    title,
                    id,
                }));
            }
            Event::Html(html) | Event::InlineHtml(html) if has_script_tag(&html) => {
                log::warn!("dropped script markup from article body");
                raw.track_script(&html);
            }
            Event::Html(html) => events.push(Event::Html(raw.clean(html))),
            Event::InlineHtml(html) => events.push(Event::InlineHtml(raw.clean(html))),
            other => events.push(other),
        }
    }
    events
}

fn has_script_tag(html: &str) -> bool {
    let lower = html.to_lowercase();
    lower.contains("<script") || lower.contains("</script")
}

/// Scanner state carried across raw HTML events, since pulldown-cmark
/// hands over an HTML block one line at a time
#[derive(Debug, Default)]
struct RawHtml {
    in_script: bool,
    in_tag: bool,
    quote: Option<u8>,
}

impl RawHtml {
    /// Update `in_script` from the last script tag in `html`
    fn track_script(&mut self, html: &str) {
        let lower = html.to_lowercase();
        match (lower.rfind("<script"), lower.rfind("</script")) {
            (None, None) => {}
            (open, close) => self.in_script = open > close,
        }
    }

    fn clean<'a>(&mut self, html: CowStr<'a>) -> CowStr<'a> {
        let stripped = self.strip_event_handlers(&html);
        let html = if stripped.len() == html.len() { html } else { CowStr::from(stripped) };
        lazy_images(html)
    }

    /// Remove `on*` event handler attributes from tags
    fn strip_event_handlers(&mut self, html: &str) -> String {
        let bytes = html.as_bytes();
        let mut out = String::with_capacity(html.len());
        let mut copied = 0;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if let Some(q) = self.quote {
                if b == q {
                    self.quote = None;
                }
                i += 1;
                continue;
            }
            match b {
                b'<' => self.in_tag = true,
                b'>' => self.in_tag = false,
                b'"' | b'\'' if self.in_tag => self.quote = Some(b),
                _ if self.in_tag && (b.is_ascii_whitespace() || i == 0) => {
                    let attr_start = if b.is_ascii_whitespace() { i + 1 } else { i };
                    if let Some(end) = handler_attr_end(bytes, attr_start) {
                        out.push_str(&html[copied..attr_start]);
                        copied = end;
                        i = end;
                        continue;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        out.push_str(&html[copied..]);
        out
    }
}

/// End of the `on*` attribute starting at `start`, if that is what's there
fn handler_attr_end(bytes: &[u8], start: usize) -> Option<usize> {
    let len = bytes.len();
    let skip_ws = |mut i: usize| {
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        i
    };

    let name_start = start;
    let mut i = name_start;
    while i < len && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-' || bytes[i] == b'_') {
        i += 1;
    }
    let name = &bytes[name_start..i];
    if name.len() < 3 || !name[..2].eq_ignore_ascii_case(b"on") || name.eq_ignore_ascii_case(b"open") {
        return None;
    }
    let name_end = i;

    let i = skip_ws(name_end);
    if bytes.get(i) != Some(&b'=') {
        return Some(skip_ws(name_end));
    }
    let i = skip_ws(i + 1);
    match bytes.get(i) {
        Some(&q) if q == b'"' || q == b'\'' => Some(
            bytes[i + 1..]
                .iter()
                .position(|&b| b == q)
                .map_or(len, |close| i + 1 + close + 1),
        ),
        Some(_) => {
            let mut end = i;
            while end < len && !bytes[end].is_ascii_whitespace() && bytes[end] != b'>' {
                end += 1;
            }
            Some(end)
        }
        None => Some(len),
    }
}

fn lazy_images(html: CowStr<'_>) -> CowStr<'_> {
    if html.contains("<img ") && !html.contains("loading=") {
        CowStr::from(html.replace("<img ", "<img loading=\"lazy\" "))
    } else {
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_become_paragraphs() {
        let html = render_article("First thought.\n\nSecond thought.", "/images/blog");
        assert_eq!(html, "<p>First thought.</p>\n<p>Second thought.</p>\n");
    }

    #[test]
    fn test_inline_html_passes_through() {
        let html = render_article("<p>The new <strong>kitchen</strong> trends</p>", "/images/blog");
        assert!(html.contains("<strong>kitchen</strong>"));
    }

    #[test]
    fn test_relative_images_resolved() {
        let html = render_article("![Island](<island one.jpg>)", "/images/blog");
        assert!(html.contains(r#"src="/images/blog/island%20one.jpg""#), "{}", html);
    }

    #[test]
    fn test_absolute_images_untouched() {
        let html = render_article("![x](https://cdn.example.com/a.jpg)", "/images/blog");
        assert!(html.contains(r#"src="https://cdn.example.com/a.jpg""#));
    }

    #[test]
    fn test_raw_img_tags_made_lazy() {
        let html = render_article("<img src=\"/a.jpg\" alt=\"a\">", "/images/blog");
        assert!(html.contains("loading=\"lazy\""));
    }

    #[test]
    fn test_script_dropped() {
        let html = render_article("<script>alert(1)</script>\n\nSafe text.", "/images/blog");
        assert!(!html.contains("<script"));
        assert!(html.contains("<p>Safe text.</p>"));
    }

    #[test]
    fn test_multiline_script_dropped() {
        let html = render_article("<script>\nalert('pwned');\n</script>\n\nSafe.", "/images/blog");
        assert!(!html.contains("alert"), "{}", html);
        assert!(html.contains("<p>Safe.</p>"));
    }

    #[test]
    fn test_inline_script_in_paragraph_dropped() {
        let html = render_article("Before <script>steal()</script> after.", "/images/blog");
        assert!(!html.contains("steal"), "{}", html);
        assert!(html.contains("Before"));
        assert!(html.contains("after."));
    }

    #[test]
    fn test_event_handler_attributes_stripped() {
        let html = render_article("<img src=\"/a.jpg\" onerror=\"alert(1)\" alt=\"a\">", "/images/blog");
        assert!(!html.contains("onerror"), "{}", html);
        assert!(!html.contains("alert"), "{}", html);
        assert!(html.contains("src=\"/a.jpg\""));
        assert!(html.contains("alt=\"a\""));
    }

    #[test]
    fn test_handler_stripped_when_tag_spans_lines() {
        let html = render_article("<div class=\"note\"\n  onclick=go()>\nHi\n</div>", "/images/blog");
        assert!(!html.contains("onclick"), "{}", html);
        assert!(!html.contains("go()"), "{}", html);
        assert!(html.contains("class=\"note\""));
    }

    #[test]
    fn test_open_attribute_is_not_a_handler() {
        let html = render_article("<details open onToggle=\"x()\">\n<summary>More</summary>\n</details>", "/images/blog");
        assert!(html.contains("<details open"), "{}", html);
        assert!(!html.contains("onToggle"), "{}", html);
    }

    #[test]
    fn test_attribute_values_mentioning_on_are_kept() {
        let html = render_article("<p title=\"one onload=x\" data-one=\"1\">t</p>", "/images/blog");
        assert!(html.contains("title=\"one onload=x\""), "{}", html);
        assert!(html.contains("data-one=\"1\""));
    }
}
