pub(crate) const GREEN_CHECK: &str = "\u{2714}";
pub(crate) const RED_X: &str = "\u{2718}";

/// `1 schema`, `2 schemas`.
pub(crate) fn counted(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}
