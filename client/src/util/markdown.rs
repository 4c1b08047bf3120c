//! Markdown rendering for assistant replies.
//!
//! Replies come from a language model and are injected with `inner_html`, so
//! raw HTML events are dropped and script-capable link targets are replaced
//! before the HTML is produced.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

fn is_blocked_url(url: &str) -> bool {
    let lowered = url.trim().to_ascii_lowercase();
    BLOCKED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme))
}

fn sanitize_tag(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link { link_type, dest_url, title, id } if is_blocked_url(&dest_url) => {
            Tag::Link { link_type, dest_url: CowStr::Borrowed("#"), title, id }
        }
        Tag::Image { link_type, dest_url, title, id } if is_blocked_url(&dest_url) => {
            Tag::Image { link_type, dest_url: CowStr::Borrowed(""), title, id }
        }
        other => other,
    }
}

/// Render `markdown` to HTML safe for `inner_html`.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(tag) => Some(Event::Start(sanitize_tag(tag))),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
