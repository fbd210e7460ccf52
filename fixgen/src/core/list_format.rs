//! Textual list format shared by both artifacts: `[5, 2, 2, 9999, 0]`.
//!
//! No trailing newline is written. Parsing tolerates surrounding whitespace
//! (including a trailing newline added by an editor) and arbitrary spacing
//! around items.

use anyhow::{Context, Result, bail};

/// Render values as a bracketed, comma-and-space separated list.
pub fn render_list(values: &[i64]) -> String {
    let items = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{items}]")
}

/// Parse a bracketed list of signed integers.
pub fn parse_list(input: &str) -> Result<Vec<i64>> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .with_context(|| "list must be enclosed in '[' and ']'")?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .enumerate()
        .map(|(index, item)| {
            let item = item.trim();
            if item.is_empty() {
                bail!("item {index} is empty");
            }
            item.parse::<i64>()
                .with_context(|| format!("item {index} is not an integer: {item:?}"))
        })
        .collect()
}
