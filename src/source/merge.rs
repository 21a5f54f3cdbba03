//! Fragment merging
//!
//! A delivered page is assembled from up to three fragments in the fixed
//! order header, content, footer.

use crate::types::MaybePage;

/// Check if a fragment is present and non-empty
pub fn has_content<V>(fragment: &MaybePage<V>) -> bool {
    fragment.as_ref().is_some_and(|items| !items.is_empty())
}

/// Concatenate the fragments that have content, header first
///
/// Absent and empty fragments are skipped; when none has content the result
/// is empty.
pub fn merge_fragments<V>(
    header: MaybePage<V>,
    content: MaybePage<V>,
    footer: MaybePage<V>,
) -> Vec<V> {
    let fragments = [header, content, footer];
    let capacity = fragments.iter().flatten().map(Vec::len).sum();

    let mut merged = Vec::with_capacity(capacity);
    for fragment in fragments.into_iter().flatten() {
        merged.extend(fragment);
    }
    merged
}
