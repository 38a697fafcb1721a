// src/core/html.rs

/// Escape text for element content and double-quoted attributes.
/// Only `& < > "` are touched; everything else passes through.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<tag class="class">text</tag>` with `text` escaped.
pub fn text_el(tag: &str, class: &str, text: &str) -> String {
    format!(r#"<{tag} class="{class}">{}</{tag}>"#, escape(text))
}

/// Swap each `{{NAME}}` marker for its content in one pass over `shell`.
/// Only the first occurrence of a marker is filled; missing markers are skipped.
/// Inserted content is never searched, so it cannot stand in for a later marker.
pub fn fill_markers(shell: &str, fills: &[(&str, &str)]) -> String {
    let mut spots: Vec<(usize, usize, &str)> = fills
        .iter()
        .filter_map(|(name, content)| {
            let marker = join!("{{", name, "}}");
            shell.find(&marker).map(|at| (at, marker.len(), *content))
        })
        .collect();
    spots.sort_by_key(|(at, _, _)| *at);

    let mut out = String::with_capacity(shell.len() + spots.iter().map(|(_, _, c)| c.len()).sum::<usize>());
    let mut cursor = 0;
    for (at, len, content) in spots {
        if at < cursor {
            continue;
        }
        out.push_str(&shell[cursor..at]);
        out.push_str(content);
        cursor = at + len;
    }
    out.push_str(&shell[cursor..]);
    out
}
