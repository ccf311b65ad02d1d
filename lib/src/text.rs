//! Text helpers for reflowing extracted descriptions into documentation
//! blocks.

use crate::consts::COMMENT_CONTINUATION;

/// Greedy word-wrap at `width` characters, preferring pre-existing line
/// breaks over inserted ones. The split character (newline or space) is
/// consumed and replaced by a newline. If a segment has no newline and no
/// space within the first `width` characters, it is hard-split at the width
/// so the loop always makes progress.
pub fn wrap(text: &str, width: usize) -> String {
    // a zero width has no valid split point anywhere
    if width == 0 {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        if rest.chars().count() <= width {
            out.push_str(rest);
            return out;
        }
        // byte offset just past the first `width` characters
        let window_end = rest
            .char_indices()
            .nth(width)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let window = &rest[..window_end];
        match window.rfind('\n').or_else(|| window.rfind(' ')) {
            Some(pos) => {
                out.push_str(&rest[..pos]);
                out.push('\n');
                rest = &rest[pos + 1..];
            }
            None => {
                out.push_str(window);
                out.push('\n');
                rest = &rest[window_end..];
            }
        }
    }
}

/// Reflows a comment at `width` and gives every continuation line the fixed
/// left margin used inside generated documentation blocks.
pub fn reflow_comment(text: &str, width: usize) -> String {
    wrap(text, width).replace('\n', &format!("\n{}", COMMENT_CONTINUATION))
}
