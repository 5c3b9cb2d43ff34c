//! Assistant-message rendering: markdown-lite plus a custom job-card token,
//! converted to the HTML fragments the chat view displays.
//!
//! A small tokenizing parser rather than ordered string substitutions: lines
//! are grouped into blocks, inline text is lexed into spans, and the tree is
//! rendered in one pass, so bold/italic precedence is structural.
//!
//! Supported inline syntax: `**bold**`, `*italic*`, `` `code` ``, and
//! `[JOB]title|company|location|salary|description[JOB]` which renders a job
//! card. An unterminated marker or a job token with the wrong field count is
//! left as literal text. Spans do not nest, matching the old non-greedy
//! regexes. Input that is already HTML contains no marker characters and
//! passes through unchanged.

#[derive(Debug, PartialEq)]
enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    JobCard {
        title: String,
        company: String,
        location: String,
        salary: String,
        description: String,
    },
}

#[derive(Debug)]
enum Block {
    Heading { level: u8, content: Vec<Inline> },
    List(Vec<Vec<Inline>>),
    /// Consecutive plain lines; rendered joined with `<br>`.
    Paragraph(Vec<Vec<Inline>>),
}

/// Converts an assistant message to an HTML fragment.
pub fn format_message(text: &str) -> String {
    let blocks = parse_blocks(text);
    let mut out = String::with_capacity(text.len() * 2);
    for block in &blocks {
        render_block(block, &mut out);
    }
    out
}

fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut list_items: Vec<Vec<Inline>> = Vec::new();
    let mut paragraph_lines: Vec<Vec<Inline>> = Vec::new();

    for line in text.split('\n') {
        let heading = line
            .strip_prefix("### ")
            .map(|rest| (3u8, rest))
            .or_else(|| line.strip_prefix("## ").map(|rest| (2u8, rest)))
            .or_else(|| line.strip_prefix("# ").map(|rest| (1u8, rest)));

        if let Some((level, rest)) = heading {
            flush_list(&mut blocks, &mut list_items);
            flush_paragraph(&mut blocks, &mut paragraph_lines);
            blocks.push(Block::Heading {
                level,
                content: lex_inline(rest),
            });
        } else if let Some(item) = line.strip_prefix("* ") {
            flush_paragraph(&mut blocks, &mut paragraph_lines);
            list_items.push(lex_inline(item));
        } else {
            flush_list(&mut blocks, &mut list_items);
            paragraph_lines.push(lex_inline(line));
        }
    }

    flush_list(&mut blocks, &mut list_items);
    flush_paragraph(&mut blocks, &mut paragraph_lines);
    blocks
}

fn flush_list(blocks: &mut Vec<Block>, items: &mut Vec<Vec<Inline>>) {
    if !items.is_empty() {
        blocks.push(Block::List(std::mem::take(items)));
    }
}

fn flush_paragraph(blocks: &mut Vec<Block>, lines: &mut Vec<Vec<Inline>>) {
    if !lines.is_empty() {
        blocks.push(Block::Paragraph(std::mem::take(lines)));
    }
}

fn lex_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut buf = String::new();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        if let Some(inner) = rest.strip_prefix("[JOB]") {
            if let Some(end) = inner.find("[JOB]") {
                let fields: Vec<&str> = inner[..end].split('|').collect();
                if fields.len() == 5 {
                    flush_text(&mut buf, &mut spans);
                    spans.push(Inline::JobCard {
                        title: fields[0].to_string(),
                        company: fields[1].to_string(),
                        location: fields[2].to_string(),
                        salary: fields[3].to_string(),
                        description: fields[4].to_string(),
                    });
                    i += "[JOB]".len() + end + "[JOB]".len();
                    continue;
                }
            }
        }

        if let Some(inner) = rest.strip_prefix("**") {
            if let Some(end) = inner.find("**") {
                flush_text(&mut buf, &mut spans);
                spans.push(Inline::Bold(inner[..end].to_string()));
                i += 2 + end + 2;
                continue;
            }
        } else if let Some(inner) = rest.strip_prefix('*') {
            if let Some(end) = inner.find('*') {
                flush_text(&mut buf, &mut spans);
                spans.push(Inline::Italic(inner[..end].to_string()));
                i += 1 + end + 1;
                continue;
            }
        } else if let Some(inner) = rest.strip_prefix('`') {
            if let Some(end) = inner.find('`') {
                flush_text(&mut buf, &mut spans);
                spans.push(Inline::Code(inner[..end].to_string()));
                i += 1 + end + 1;
                continue;
            }
        }

        // No span starts here; take one character as literal text.
        if let Some(c) = rest.chars().next() {
            buf.push(c);
            i += c.len_utf8();
        }
    }

    flush_text(&mut buf, &mut spans);
    spans
}

fn flush_text(buf: &mut String, spans: &mut Vec<Inline>) {
    if !buf.is_empty() {
        spans.push(Inline::Text(std::mem::take(buf)));
    }
}

fn render_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            let (tag, class) = match level {
                1 => ("h1", "text-2xl font-bold mt-2 mb-1"),
                2 => ("h2", "text-xl font-bold mt-2 mb-1"),
                _ => ("h3", "text-lg font-bold mt-2 mb-1"),
            };
            out.push_str(&format!("<{tag} class=\"{class}\">"));
            render_inlines(content, out);
            out.push_str(&format!("</{tag}>"));
        }
        Block::List(items) => {
            out.push_str("<ul class=\"list-disc my-2\">");
            for item in items {
                out.push_str("<li class=\"ml-4\">");
                render_inlines(item, out);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Block::Paragraph(lines) => {
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    out.push_str("<br>");
                }
                render_inlines(line, out);
            }
        }
    }
}

fn render_inlines(spans: &[Inline], out: &mut String) {
    for span in spans {
        match span {
            Inline::Text(t) => out.push_str(t),
            Inline::Bold(t) => {
                out.push_str("<strong>");
                out.push_str(t);
                out.push_str("</strong>");
            }
            Inline::Italic(t) => {
                out.push_str("<em>");
                out.push_str(t);
                out.push_str("</em>");
            }
            Inline::Code(t) => {
                out.push_str("<code class=\"bg-base-200 px-1 rounded\">");
                out.push_str(t);
                out.push_str("</code>");
            }
            Inline::JobCard {
                title,
                company,
                location,
                salary,
                description,
            } => {
                out.push_str("<div class=\"card bg-base-100 shadow-lg my-2\">");
                out.push_str("<div class=\"card-body p-4\">");
                out.push_str("<div class=\"flex justify-between items-start\"><div>");
                out.push_str(&format!("<h4 class=\"font-bold text-lg\">{title}</h4>"));
                out.push_str(&format!(
                    "<div class=\"text-sm opacity-70\">{company} • {location}</div>"
                ));
                out.push_str("</div>");
                out.push_str(&format!(
                    "<div class=\"badge badge-primary\">{salary}</div>"
                ));
                out.push_str("</div>");
                out.push_str(&format!("<p class=\"my-2 text-sm\">{description}</p>"));
                out.push_str("<div class=\"card-actions justify-end\">");
                out.push_str("<button class=\"btn btn-xs btn-outline\">Save</button>");
                out.push_str("<button class=\"btn btn-xs btn-primary\">Apply</button>");
                out.push_str("</div></div></div>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(format_message("**hi**"), "<strong>hi</strong>");
    }

    #[test]
    fn test_italic() {
        assert_eq!(format_message("*hi*"), "<em>hi</em>");
    }

    #[test]
    fn test_bold_and_italic_in_one_line() {
        assert_eq!(
            format_message("**b** and *i*"),
            "<strong>b</strong> and <em>i</em>"
        );
    }

    #[test]
    fn test_unterminated_bold_is_literal() {
        assert_eq!(format_message("**nope"), "**nope");
    }

    #[test]
    fn test_code_span() {
        assert_eq!(
            format_message("run `cargo test` now"),
            "run <code class=\"bg-base-200 px-1 rounded\">cargo test</code> now"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            format_message("# Top"),
            "<h1 class=\"text-2xl font-bold mt-2 mb-1\">Top</h1>"
        );
        assert_eq!(
            format_message("## Mid"),
            "<h2 class=\"text-xl font-bold mt-2 mb-1\">Mid</h2>"
        );
        assert_eq!(
            format_message("### Low"),
            "<h3 class=\"text-lg font-bold mt-2 mb-1\">Low</h3>"
        );
    }

    #[test]
    fn test_consecutive_bullets_form_one_list() {
        let html = format_message("* one\n* two");
        assert_eq!(
            html,
            "<ul class=\"list-disc my-2\"><li class=\"ml-4\">one</li><li class=\"ml-4\">two</li></ul>"
        );
    }

    #[test]
    fn test_bullet_items_carry_inline_formatting() {
        let html = format_message("* **bold** item");
        assert!(html.contains("<li class=\"ml-4\"><strong>bold</strong> item</li>"));
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(format_message("a\nb"), "a<br>b");
        assert_eq!(format_message("a\n\nb"), "a<br><br>b");
    }

    #[test]
    fn test_job_card_contains_each_field_once() {
        let html = format_message("[JOB]Rust Dev|Acme|Berlin|$90k|Build things[JOB]");
        for field in ["Rust Dev", "Acme", "Berlin", "$90k", "Build things"] {
            assert_eq!(html.matches(field).count(), 1, "field {field}");
        }
        assert!(html.starts_with("<div class=\"card bg-base-100 shadow-lg my-2\">"));
        assert!(html.ends_with("</div></div></div>"));
    }

    #[test]
    fn test_job_card_inline_with_surrounding_text() {
        let html = format_message("Found one: [JOB]T|C|L|S|D[JOB] — apply soon");
        assert!(html.starts_with("Found one: <div class=\"card"));
        assert!(html.ends_with("— apply soon"));
    }

    #[test]
    fn test_malformed_job_token_left_as_text() {
        let text = "[JOB]only|four|fields|here[JOB]";
        assert_eq!(format_message(text), text);
    }

    #[test]
    fn test_unterminated_job_token_left_as_text() {
        let text = "[JOB]title|company";
        assert_eq!(format_message(text), text);
    }

    #[test]
    fn test_html_input_passes_through() {
        let html = "<strong>x</strong> and <em>y</em>";
        assert_eq!(format_message(html), html);
    }

    #[test]
    fn test_second_pass_does_not_rewrap() {
        let once = format_message("**x** and *y*");
        assert_eq!(format_message(&once), once);
    }

    #[test]
    fn test_mixed_document() {
        let html = format_message("# Results\n* **Rust Dev** at Acme\nMore below");
        assert!(html.contains("<h1"));
        assert!(html.contains("<ul"));
        assert!(html.contains("<strong>Rust Dev</strong>"));
        assert!(html.contains("More below"));
    }
}
