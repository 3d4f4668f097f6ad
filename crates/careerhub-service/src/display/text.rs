//! Rich-text (HTML) to plain text for terminal output.

const BLOCK_TAGS: [&str; 12] = ["p", "br", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Strip tags from editor HTML, turning block elements into line breaks and
/// decoding the common entities.
pub fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&decode_entities(&rest[..start]));
        let Some(end) = rest[start..].find('>') else {
            rest = &rest[start..];
            break;
        };
        let tag = &rest[start + 1..start + end];
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if BLOCK_TAGS.contains(&name.as_str()) {
            if name == "li" && !tag.starts_with('/') {
                out.push_str("\n- ");
            } else {
                out.push('\n');
            }
        }
        rest = &rest[start + end + 1..];
    }
    out.push_str(&decode_entities(rest));

    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_become_lines() {
        let html = "<h2>Perks</h2><ul><li>Remote &amp; flexible</li><li><strong>Equity</strong></li></ul>";
        assert_eq!(plain_text(html), "Perks\n- Remote & flexible\n- Equity");
    }

    #[test]
    fn test_plain_input_is_kept() {
        assert_eq!(plain_text("  just text "), "just text");
        assert_eq!(plain_text("a < b"), "a < b");
    }
}
