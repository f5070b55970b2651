//! Greedy word wrapping for letter text.

/// Terminal measure: one column per char.
pub fn column_width(s: &str) -> u16 {
    s.chars().count().min(u16::MAX as usize) as u16
}

/// Wrap `text` into at most `max_lines` lines no wider than `max_width`.
///
/// Words are packed greedily. Each word costs its own width plus one
/// trailing space, and joins the current line while the running width stays
/// within `max_width`. A word wider than `max_width` still gets a line of its
/// own (the caller clips it). Lines past `max_lines` are dropped.
pub fn wrap_words<F>(text: &str, max_width: u16, max_lines: usize, measure: F) -> Vec<String>
where
    F: Fn(&str) -> u16,
{
    let mut lines: Vec<String> = Vec::with_capacity(max_lines);
    if max_lines == 0 {
        return lines;
    }

    let space = measure(" ") as u32;
    let mut current = String::new();
    let mut current_width: u32 = 0;

    for word in text.split_whitespace() {
        let cost = measure(word) as u32 + space;
        if current_width + cost <= max_width as u32 {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width += cost;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            if lines.len() == max_lines {
                return lines;
            }
        }
        current.push_str(word);
        current_width = cost;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
