//! Vansh partitioning
//!
//! Tree construction and relationship lookups always run inside one vansh.

use std::collections::BTreeMap;

use crate::shared::models::Member;

/// Trimmed, lowercased vansh key
pub fn normalize_vansh(vansh: &str) -> String {
    vansh.trim().to_lowercase()
}

/// Group members by normalized vansh; members without one go under `""`
pub fn partition_by_vansh(members: &[Member]) -> BTreeMap<String, Vec<Member>> {
    let mut partitions: BTreeMap<String, Vec<Member>> = BTreeMap::new();
    for member in members {
        let key = member
            .vansh
            .as_deref()
            .map(normalize_vansh)
            .unwrap_or_default();
        partitions.entry(key).or_default().push(member.clone());
    }
    partitions
}

/// Members of one vansh, list order preserved
pub fn scope_to_vansh(members: &[Member], vansh: &str) -> Vec<Member> {
    let wanted = normalize_vansh(vansh);
    members
        .iter()
        .filter(|m| m.vansh.as_deref().map(normalize_vansh).as_deref() == Some(wanted.as_str()))
        .cloned()
        .collect()
}
