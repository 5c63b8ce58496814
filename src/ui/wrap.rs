//! Greedy word wrapping for dialog text

/// Wrap `text` into lines of at most `width` characters.
///
/// Explicit newlines always end a line. When a line overflows it is broken
/// at its last space, which is dropped; a line with no space is cut at
/// exactly `width` characters.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut line: Vec<char> = Vec::with_capacity(width);
    // Set when the last break swallowed a space and carried nothing over,
    // so a newline right after it would only add a blank line
    let mut broke_at_space = false;

    for ch in text.chars() {
        if ch == '\n' {
            if !(broke_at_space && line.is_empty()) {
                lines.push(line.drain(..).collect());
            }
            broke_at_space = false;
            continue;
        }
        broke_at_space = false;

        if line.len() == width {
            if ch == ' ' {
                lines.push(line.drain(..).collect());
                broke_at_space = true;
                continue;
            }
            match line.iter().rposition(|&c| c == ' ') {
                Some(k) if k > 0 => {
                    let rest = line.split_off(k + 1);
                    line.pop();
                    lines.push(line.drain(..).collect());
                    line = rest;
                }
                _ => lines.push(line.drain(..).collect()),
            }
        }
        line.push(ch);
    }

    if !line.is_empty() {
        lines.push(line.into_iter().collect());
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Like [`wrap`], keeping only the first `height` lines
pub fn wrap_lines(text: &str, width: usize, height: usize) -> Vec<String> {
    let mut lines = wrap(text, width);
    lines.truncate(height);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_break_exactly_at_width() {
        assert_eq!(wrap("abcdefghij klmno", 10), vec!["abcdefghij", "klmno"]);
    }

    #[test]
    fn test_break_at_last_space_then_hard_break() {
        assert_eq!(
            wrap("abc def ghijklmnopq", 10),
            vec!["abc def", "ghijklmnop", "q"]
        );
    }

    #[test]
    fn test_word_of_exact_width_is_not_split() {
        assert_eq!(wrap("abc def ghijklmnop", 10), vec!["abc def", "ghijklmnop"]);
    }

    #[test]
    fn test_long_word_hard_breaks_repeatedly() {
        assert_eq!(wrap("abcdefghijk", 4), vec!["abcd", "efgh", "ijk"]);
    }

    #[test]
    fn test_explicit_newlines() {
        assert_eq!(wrap("MDI:\nG0 X1", 20), vec!["MDI:", "G0 X1"]);
        assert_eq!(wrap("a\n\nb", 5), vec!["a", "", "b"]);
        assert_eq!(wrap("a\n\n", 5), vec!["a"]);
    }

    #[test]
    fn test_newline_after_wrap_adds_no_blank_line() {
        assert_eq!(wrap("abcdefghij \nklm", 10), vec!["abcdefghij", "klm"]);
        assert_eq!(wrap("abcdefghij\nklm", 10), vec!["abcdefghij", "klm"]);
    }

    #[test]
    fn test_leading_space_is_not_a_break_point() {
        assert_eq!(wrap(" abcdef", 4), vec![" abc", "def"]);
    }

    #[test]
    fn test_zero_width() {
        assert!(wrap("anything", 0).is_empty());
    }

    #[test]
    fn test_height_truncates_silently() {
        let text = "one two three four five six";
        assert_eq!(wrap_lines(text, 5, 2), vec!["one", "two"]);
        assert_eq!(wrap_lines(text, 5, 0), Vec::<String>::new());
    }

    #[test]
    fn test_long_prompt_layout() {
        let prompt = "Enter axis letter, then new value for axis position; e.g. X4.5 sets the current X position to 4.5.";
        let lines = wrap(prompt, 30);
        assert!(lines.iter().all(|l| l.chars().count() <= 30));
        assert_eq!(lines[0], "Enter axis letter, then new");
    }

    proptest! {
        #[test]
        fn wrapped_lines_fit_and_rewrap_unchanged(
            text in "[a-z \n]{0,80}",
            width in 1usize..16,
        ) {
            let lines = wrap(&text, width);
            for line in &lines {
                prop_assert!(line.chars().count() <= width);
            }
            let rewrapped = wrap(&lines.join("\n"), width);
            prop_assert_eq!(rewrapped, lines);
        }
    }
}
