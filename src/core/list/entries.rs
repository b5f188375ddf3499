//! Reconstruction of logical list entries from physical lines.
//!
//! A trimmed line starting with `*` begins a new entry; every other
//! non-empty line continues the current one. Soft-wrapped entries are
//! joined back into a single canonical string with single spaces.

/// Collect logical entries from raw input lines.
///
/// Blank lines contribute nothing to an entry's canonical text (joining
/// an empty fragment would only inject stray spaces). Content before the
/// first bullet has no defined meaning; it is flushed as its own
/// marker-less entry once a bullet appears rather than dropped.
pub(super) fn collect(lines: &[&str]) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    let mut fragments: Vec<&str> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.starts_with('*') {
            if !fragments.is_empty() {
                entries.push(fragments.join(" "));
            }
            fragments = vec![trimmed];
        } else if !trimmed.is_empty() {
            fragments.push(trimmed);
        }
    }

    // After any bullet line, the buffer is always bullet-headed. A final
    // buffer without a bullet head means no bullet appeared anywhere, and
    // input with no bullet lines produces zero entries.
    if fragments.first().is_some_and(|f| f.starts_with('*')) {
        entries.push(fragments.join(" "));
    }

    entries
}

/// Sort entries case-insensitively. The sort is stable: entries whose
/// canonical texts are equal under case-folding keep their input order.
pub(super) fn sort(entries: &mut [String]) {
    entries.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
}
