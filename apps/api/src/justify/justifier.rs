//! Greedy line justification.
//!
//! Words are packed left to right onto lines of at most `max_width` code points.
//! Every line except the last is stretched to exactly `max_width` by spreading
//! spaces over the gaps, leftmost gaps taking the remainder. The last line is
//! left as-is with single spaces.

/// Default output width used by the API.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Justifies `text` to `max_width` columns.
///
/// Whitespace of any kind separates words. Returns an empty string for empty or
/// whitespace-only input. A word longer than `max_width` is placed alone on its
/// own line and is never split.
pub fn justify(text: &str, max_width: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for word in words {
        let word_len = char_len(word);
        let space = if current.is_empty() { 0 } else { 1 };

        if current_len + space + word_len <= max_width {
            current.push(word);
            current_len += space + word_len;
        } else {
            if !current.is_empty() {
                lines.push(justify_line(&current, max_width));
            }
            current = vec![word];
            current_len = word_len;
        }
    }

    // Last line is never stretched.
    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    lines.join("\n")
}

/// Counts whitespace-delimited words. Uses the same tokenization as [`justify`].
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Stretches one closed line to `max_width` columns.
pub(crate) fn justify_line(words: &[&str], max_width: usize) -> String {
    let total_chars: usize = words.iter().map(|w| char_len(w)).sum();
    // Saturates for an over-long single word, which is then emitted unpadded.
    let total_spaces = max_width.saturating_sub(total_chars);

    if words.len() == 1 {
        let mut line = String::with_capacity(words[0].len() + total_spaces);
        line.push_str(words[0]);
        line.extend(std::iter::repeat(' ').take(total_spaces));
        return line;
    }

    let gaps = words.len() - 1;
    let spaces_per_gap = total_spaces / gaps;
    let extra_spaces = total_spaces % gaps;

    let mut line = String::with_capacity(total_chars + total_spaces);
    for (i, word) in words.iter().enumerate() {
        line.push_str(word);
        if i < gaps {
            let spaces = spaces_per_gap + usize::from(i < extra_spaces);
            line.extend(std::iter::repeat(' ').take(spaces));
        }
    }
    line
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
