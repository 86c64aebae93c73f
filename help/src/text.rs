//! Word wrapping for help descriptions.

use std::collections::VecDeque;

/// Wraps `text` on spaces so that no line is longer than `max_line_length`
/// characters.
///
/// Lines after the first start with `continuation_prefix`, which is not
/// counted in the line length. Words longer than a line are split. Trailing
/// whitespace is removed from every line.
///
/// # Examples
///
/// ```
/// use verbargs_help::wrap_text;
///
/// assert_eq!(wrap_text("the quick brown fox", 10, "  "), "the quick\n  brown fox");
/// assert_eq!(wrap_text("abcdefgh", 3, ""), "abc\ndef\ngh");
/// ```
pub fn wrap_text(text: &str, max_line_length: usize, continuation_prefix: &str) -> String {
    let max_line_length = max_line_length.max(1);
    let mut words: VecDeque<String> = text.split(' ').map(String::from).collect();

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_length = 0;

    while let Some(mut word) = words.pop_front() {
        if let Some((split_at, _)) = word.char_indices().nth(max_line_length) {
            let tail = word.split_off(split_at);
            words.push_front(tail);
        }

        let word_length = word.chars().count();
        if line_length + word_length > max_line_length {
            lines.push(line.trim_end().to_string());
            line.clear();
            line_length = 0;
        }

        line.push_str(&word);
        line.push(' ');
        line_length += word_length + 1;
    }
    lines.push(line.trim_end().to_string());

    lines.join(&format!("\n{continuation_prefix}"))
}
