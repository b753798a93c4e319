//! Line-oriented diff bodies for virtual documents.

use tether_core::constants::DIFF_ID_PREFIX;

/// Registry identifier for the diff attached to a transcript entry.
pub fn diff_id_for_entry(entry_id: &str) -> String {
    format!("{DIFF_ID_PREFIX}{entry_id}")
}

/// Render `old` → `new` as a line diff.
///
/// Shared leading and trailing lines are kept as context (`"  "`), the differing
/// middle is emitted as removals (`"- "`) followed by additions (`"+ "`).
pub fn render_line_diff(old: &str, new: &str) -> String {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    let prefix = old_lines
        .iter()
        .zip(&new_lines)
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old_lines[prefix..]
        .iter()
        .rev()
        .zip(new_lines[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out: Vec<String> = Vec::with_capacity(old_lines.len() + new_lines.len());
    out.extend(old_lines[..prefix].iter().map(|l| format!("  {l}")));
    out.extend(
        old_lines[prefix..old_lines.len() - suffix]
            .iter()
            .map(|l| format!("- {l}")),
    );
    out.extend(
        new_lines[prefix..new_lines.len() - suffix]
            .iter()
            .map(|l| format!("+ {l}")),
    );
    out.extend(
        old_lines[old_lines.len() - suffix..]
            .iter()
            .map(|l| format!("  {l}")),
    );
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_change() {
        assert_eq!(render_line_diff("old", "new"), "- old\n+ new");
    }

    #[test]
    fn context_is_preserved() {
        let old = "fn a() {\n    1\n}";
        let new = "fn a() {\n    2\n}";
        assert_eq!(
            render_line_diff(old, new),
            "  fn a() {\n-     1\n+     2\n  }"
        );
    }

    #[test]
    fn pure_addition_and_removal() {
        assert_eq!(render_line_diff("", "added"), "+ added");
        assert_eq!(render_line_diff("removed", ""), "- removed");
        assert_eq!(render_line_diff("same", "same"), "  same");
    }

    #[test]
    fn diff_ids_are_namespaced() {
        assert_eq!(diff_id_for_entry("turn-7"), "diff://turn-7");
    }
}
