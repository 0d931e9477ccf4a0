use std::collections::{HashMap, HashSet};

use profile_core::model::CodeSnippet;

/// Renders a snippet as a fenced Markdown code block and sanitizes the result.
#[must_use]
pub fn code_block_html(snippet: &CodeSnippet) -> String {
    let fence = fence_for(&snippet.source);
    let mut markdown = format!("{fence}{}\n{}", snippet.language, snippet.source);
    if !markdown.ends_with('\n') {
        markdown.push('\n');
    }
    markdown.push_str(&fence);
    markdown.push('\n');

    let parser = pulldown_cmark::Parser::new_ext(&markdown, pulldown_cmark::Options::empty());
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = ["pre", "code"].into_iter().collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("code", ["class"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

// A backtick fence longer than any backtick run inside the source.
fn fence_for(source: &str) -> String {
    let mut longest = 0usize;
    let mut run = 0usize;
    for ch in source.chars() {
        if ch == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat(longest.max(2) + 1)
}
