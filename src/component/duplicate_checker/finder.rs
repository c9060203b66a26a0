use crate::tools::User;
use std::collections::HashSet;

/// Returns every record of `coll_b` that is value-equal to at least one
/// record of `coll_a`, in the order they appear in `coll_b`.
///
/// Duplicates inside either input are not collapsed: if `coll_b` holds
/// the same matching record twice, the result holds it twice. Builds a
/// hash set over `coll_a`, so the cost is O(|A| + |B|) amortized.
#[must_use]
pub fn find_duplicates(coll_a: &[User], coll_b: &[User]) -> Vec<User> {
    let known: HashSet<&User> = coll_a.iter().collect();

    coll_b
        .iter()
        .filter(|user| known.contains(user))
        .cloned()
        .collect()
}
