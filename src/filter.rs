use std::collections::HashSet;

use crate::jrd::Link;

/// Keeps the links whose `rel` is one of `rels`, in their original order.
///
/// No filter means no filtering. Links without a `rel` only survive that
/// case. Applying the same filter twice changes nothing.
pub fn by_rel(links: Vec<Link>, rels: &[String]) -> Vec<Link> {
    if rels.is_empty() {
        return links;
    }
    let wanted: HashSet<&str> = rels.iter()
        .map(String::as_str)
        .collect();
    links.into_iter()
        .filter(|link| link.rel.as_deref()
                .is_some_and(|rel| wanted.contains(rel))
        )
        .collect()
}
