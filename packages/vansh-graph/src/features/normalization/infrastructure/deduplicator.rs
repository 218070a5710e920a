//! Deduplicator - one canonical `Member` per logical person
//!
//! # Algorithm
//! 1. Ingest raw documents, skipping non-objects (O(N))
//! 2. Group by `identity_key`, groups in first-seen order (O(N))
//! 3. Rank each group by completeness, then fold it into the top record
//!    (O(N log N))
//! 4. Reconcile the two children aliases so both carry the same set (O(N))
//!
//! Merging is pure: inputs are never mutated, the output shares no data with them.
//! Field values depend only on the set of records per person, not their order.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::ingest::ingest_record;
use crate::features::normalization::domain::{completeness_score, identity_key};
use crate::shared::models::{MarriedDetails, Member, PersonalDetails, SerialKey};

/// Counters from one deduplication run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupStats {
    /// Raw documents received
    pub input: usize,
    /// Non-object documents skipped
    pub skipped: usize,
    /// Merges performed
    pub merged: usize,
    /// Canonical members produced
    pub output: usize,
}

/// Merge two records describing the same person
///
/// The higher-ranked record is the base; the other only fills fields the
/// base lacks. Children aliases are unioned, base entries first.
pub fn merge_records(a: &Member, b: &Member) -> Member {
    if rank_key(b) < rank_key(a) {
        fill(b, a)
    } else {
        fill(a, b)
    }
}

/// Sort key: higher completeness first, ties broken by serialized content
fn rank_key(member: &Member) -> (Reverse<u32>, String) {
    (
        Reverse(completeness_score(member)),
        serde_json::to_string(member).unwrap_or_default(),
    )
}

fn fill(base: &Member, other: &Member) -> Member {
    Member {
        ser_no: pick(&base.ser_no, &other.ser_no),
        document_id: pick(&base.document_id, &other.document_id),
        father_ser_no: pick(&base.father_ser_no, &other.father_ser_no),
        mother_ser_no: pick(&base.mother_ser_no, &other.mother_ser_no),
        spouse_ser_no: pick(&base.spouse_ser_no, &other.spouse_ser_no),
        children_ser_nos: union(&base.children_ser_nos, &other.children_ser_nos),
        son_daughter_ser_no: union(&base.son_daughter_ser_no, &other.son_daughter_ser_no),
        level: pick(&base.level, &other.level),
        vansh: pick(&base.vansh, &other.vansh),
        personal_details: merge_personal(&base.personal_details, &other.personal_details),
        married_details: merge_married(&base.married_details, &other.married_details),
    }
}

fn merge_personal(base: &PersonalDetails, other: &PersonalDetails) -> PersonalDetails {
    PersonalDetails {
        first_name: pick(&base.first_name, &other.first_name),
        middle_name: pick(&base.middle_name, &other.middle_name),
        last_name: pick(&base.last_name, &other.last_name),
        gender: pick(&base.gender, &other.gender),
        date_of_birth: pick(&base.date_of_birth, &other.date_of_birth),
        email: pick(&base.email, &other.email),
        mobile_number: pick(&base.mobile_number, &other.mobile_number),
        profile_image: pick(&base.profile_image, &other.profile_image),
        is_alive: pick(&base.is_alive, &other.is_alive),
        status: pick(&base.status, &other.status),
    }
}

fn merge_married(base: &MarriedDetails, other: &MarriedDetails) -> MarriedDetails {
    MarriedDetails {
        spouse_first_name: pick(&base.spouse_first_name, &other.spouse_first_name),
        spouse_middle_name: pick(&base.spouse_middle_name, &other.spouse_middle_name),
        spouse_last_name: pick(&base.spouse_last_name, &other.spouse_last_name),
        spouse_mobile_number: pick(&base.spouse_mobile_number, &other.spouse_mobile_number),
        date_of_marriage: pick(&base.date_of_marriage, &other.date_of_marriage),
    }
}

#[inline]
fn pick<T: Clone>(base: &Option<T>, other: &Option<T>) -> Option<T> {
    base.clone().or_else(|| other.clone())
}

fn union(base: &[SerialKey], other: &[SerialKey]) -> Vec<SerialKey> {
    let mut out: Vec<SerialKey> = Vec::with_capacity(base.len() + other.len());
    for key in base.iter().chain(other) {
        if !out.contains(key) {
            out.push(key.clone());
        }
    }
    out
}

/// Collapse duplicates; output keeps first-seen order
pub fn deduplicate(members: &[Member]) -> Vec<Member> {
    dedup_inner(members.iter().cloned()).0
}

/// Ingest raw documents and collapse duplicates
pub fn deduplicate_raw(records: &[Value]) -> Vec<Member> {
    deduplicate_raw_with_stats(records).0
}

/// Like `deduplicate_raw`, also returning counters
pub fn deduplicate_raw_with_stats(records: &[Value]) -> (Vec<Member>, DedupStats) {
    let ingested: Vec<Member> = records.iter().filter_map(ingest_record).collect();
    let skipped = records.len() - ingested.len();
    if skipped > 0 {
        debug!("deduplicate: skipped {} malformed records", skipped);
    }

    let (members, merged) = dedup_inner(ingested.into_iter());
    let stats = DedupStats {
        input: records.len(),
        skipped,
        merged,
        output: members.len(),
    };
    debug!(
        "deduplicate: {} records -> {} members ({} merges)",
        stats.input, stats.output, stats.merged
    );
    (members, stats)
}

fn dedup_inner(members: impl Iterator<Item = Member>) -> (Vec<Member>, usize) {
    let mut groups: Vec<Vec<Member>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for member in members {
        let key = identity_key(&member);
        match index.get(&key) {
            Some(&idx) => groups[idx].push(member),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![member]);
            }
        }
    }

    let mut merged = 0;
    let mut order = Vec::with_capacity(groups.len());
    for mut group in groups {
        merged += group.len() - 1;
        group.sort_by_cached_key(rank_key);

        let mut records = group.into_iter();
        let Some(first) = records.next() else {
            continue;
        };
        let mut member = records.fold(first, |acc, next| fill(&acc, &next));
        reconcile_children(&mut member);
        order.push(member);
    }

    (order, merged)
}

/// Make both children aliases carry the same deduplicated set
fn reconcile_children(member: &mut Member) {
    let all = union(&member.children_ser_nos, &member.son_daughter_ser_no);
    member.son_daughter_ser_no = all.clone();
    member.children_ser_nos = all;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_merge_prefers_more_complete_record() {
        let sparse = Member::with_ser_no(5).named("Old", "Name");
        let rich = Member::with_ser_no(5).father(1).mother(2).named("New", "Name");

        let merged = merge_records(&sparse, &rich);
        assert_eq!(merged.personal_details.first_name.as_deref(), Some("New"));
        assert_eq!(merged.father_ser_no, Some(SerialKey::Numeric(1)));

        let merged = merge_records(&rich, &sparse);
        assert_eq!(merged.personal_details.first_name.as_deref(), Some("New"));
    }

    #[test]
    fn test_merge_fills_missing_fields_from_weaker_record() {
        let mut weak = Member::with_ser_no(5);
        weak.personal_details.email = Some("x@y.z".into());
        weak.married_details.spouse_first_name = Some("Leela".into());
        let strong = Member::with_ser_no(5).father(1).spouse(6);

        let merged = merge_records(&weak, &strong);
        assert_eq!(merged.spouse_ser_no, Some(SerialKey::Numeric(6)));
        assert_eq!(merged.personal_details.email.as_deref(), Some("x@y.z"));
        assert_eq!(merged.married_details.spouse_first_name.as_deref(), Some("Leela"));
    }

    #[test]
    fn test_merge_tie_ignores_argument_order() {
        let a = Member::with_ser_no(5).named("First", "X");
        let b = Member::with_ser_no(5).named("Second", "X");
        assert_eq!(merge_records(&a, &b), merge_records(&b, &a));
        assert_eq!(
            merge_records(&b, &a).personal_details.first_name.as_deref(),
            Some("First")
        );
    }

    #[test]
    fn test_dedup_tie_ignores_input_order() {
        let alpha = json!({"serNo": 5, "firstName": "Alpha"});
        let beta = json!({"serNo": 5, "firstName": "Beta"});

        let forward = deduplicate_raw(&[alpha.clone(), beta.clone()]);
        let backward = deduplicate_raw(&[beta, alpha]);
        assert_eq!(forward, backward);
        assert_eq!(forward[0].personal_details.first_name.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_three_way_merge_ignores_input_order() {
        let a = json!({"serNo": 5, "fatherSerNo": 1, "firstName": "A"});
        let b = json!({"serNo": 5, "childrenSerNos": [7, 8], "firstName": "B"});
        let c = json!({"serNo": 5, "motherSerNo": 2, "spouseSerNo": 9, "firstName": "C"});

        let abc = deduplicate_raw(&[a.clone(), b.clone(), c.clone()]);
        let bca = deduplicate_raw(&[b.clone(), c.clone(), a.clone()]);
        let cab = deduplicate_raw(&[c, a, b]);

        assert_eq!(abc, bca);
        assert_eq!(abc, cab);
        let five = &abc[0];
        assert_eq!(five.father_ser_no, Some(SerialKey::Numeric(1)));
        assert_eq!(five.mother_ser_no, Some(SerialKey::Numeric(2)));
        assert_eq!(five.spouse_ser_no, Some(SerialKey::Numeric(9)));
        assert_eq!(five.children_ser_nos, vec![7.into(), 8.into()]);
    }

    #[test]
    fn test_merge_unions_children_aliases() {
        let mut a = Member::with_ser_no(1);
        a.children_ser_nos = vec![2.into(), 3.into()];
        let mut b = Member::with_ser_no(1);
        b.children_ser_nos = vec![3.into(), 4.into()];
        b.son_daughter_ser_no = vec![9.into()];

        // b scores higher, so its entries lead
        let merged = merge_records(&a, &b);
        assert_eq!(merged.children_ser_nos, vec![3.into(), 4.into(), 2.into()]);
        assert_eq!(merged.son_daughter_ser_no, vec![9.into()]);
    }

    #[test]
    fn test_deduplicate_raw_mixed_serial_shapes() {
        let records = vec![
            json!({"serNo": 5, "firstName": "Vasant"}),
            json!({"serNo": "5", "fatherSerNo": 1}),
            json!({"serNo": {"$numberLong": "5"}, "childrenSerNos": [7]}),
            json!("garbage"),
            json!({"serNo": 1}),
        ];

        let (members, stats) = deduplicate_raw_with_stats(&records);
        assert_eq!(members.len(), 2);
        assert_eq!(stats.input, 5);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.merged, 2);
        assert_eq!(stats.output, 2);

        let five = &members[0];
        assert_eq!(five.ser_no, Some(SerialKey::Numeric(5)));
        assert_eq!(five.father_ser_no, Some(SerialKey::Numeric(1)));
        assert_eq!(five.personal_details.first_name.as_deref(), Some("Vasant"));
        assert_eq!(five.children_ser_nos, vec![SerialKey::Numeric(7)]);
        assert_eq!(five.son_daughter_ser_no, five.children_ser_nos);
    }

    #[test]
    fn test_father_survives_regardless_of_order() {
        let with_father = json!({"serNo": 3, "fatherSerNo": 1});
        let without = json!({"serNo": 3, "firstName": "Kamal", "lastName": "Gogte"});

        let forward = deduplicate_raw(&[with_father.clone(), without.clone()]);
        let backward = deduplicate_raw(&[without, with_father]);

        assert_eq!(forward.len(), 1);
        assert_eq!(backward.len(), 1);
        assert_eq!(forward[0].father_ser_no, Some(SerialKey::Numeric(1)));
        assert_eq!(backward[0].father_ser_no, Some(SerialKey::Numeric(1)));
        assert_eq!(forward[0], backward[0]);
    }

    #[test]
    fn test_composite_key_merges_serial_less_records() {
        let records = vec![
            json!({"firstName": "Meera", "lastName": "Gogte", "vansh": "4"}),
            json!({"personalDetails": {"firstName": "meera", "lastName": "GOGTE"}, "vansh": "4", "level": 3}),
            json!({"firstName": "Meera", "lastName": "Gogte", "vansh": "5"}),
        ];
        let members = deduplicate_raw(&records);
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].level, Some(3));
    }

    #[test]
    fn test_deduplicate_is_idempotent() {
        let records = vec![
            json!({"serNo": 1, "sonDaughterSerNo": [2]}),
            json!({"serNo": 1, "childrenSerNos": [3]}),
            json!({"serNo": 2, "fatherSerNo": 1}),
        ];
        let once = deduplicate_raw(&records);
        let twice = deduplicate(&once);
        assert_eq!(once, twice);
        assert_eq!(once[0].children_ser_nos, vec![3.into(), 2.into()]);
    }
}
