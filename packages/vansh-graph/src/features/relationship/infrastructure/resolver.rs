//! Relationship Resolver
//!
//! Answers "what is p2 to p1" from backlinks alone. Checks run in a fixed
//! priority order and the first match wins:
//!
//! 1. Spouse (either side)
//! 2. Direct parent or child (`father_ser_no` / `mother_ser_no`)
//! 3. Parent or child via children lists
//! 4. Sibling (same non-null father)
//! 5. Grandparent or grandchild (one extra father hop)
//! 6. Uncle/aunt or nephew/niece
//! 7. Cousin (fathers share a non-null father)
//!
//! No match is a valid answer, not an error.

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use tracing::debug;

use crate::features::relationship::domain::{RelatedMember, Relation};
use crate::shared::models::{Member, SerialKey};

/// Serial index over one vansh partition
pub struct RelationshipResolver<'a> {
    members: &'a [Member],
    /// First occurrence wins
    by_serial: HashMap<&'a SerialKey, usize>,
}

impl<'a> RelationshipResolver<'a> {
    pub fn new(members: &'a [Member]) -> Self {
        let mut by_serial = HashMap::with_capacity(members.len());
        for (idx, member) in members.iter().enumerate() {
            if let Some(ser_no) = &member.ser_no {
                by_serial.entry(ser_no).or_insert(idx);
            }
        }
        Self { members, by_serial }
    }

    pub fn get(&self, ser_no: &SerialKey) -> Option<&'a Member> {
        self.by_serial.get(ser_no).map(|&idx| &self.members[idx])
    }

    pub fn contains(&self, ser_no: &SerialKey) -> bool {
        self.by_serial.contains_key(ser_no)
    }

    fn father_of(&self, member: &Member) -> Option<&'a Member> {
        member.father_ser_no.as_ref().and_then(|f| self.get(f))
    }

    /// What `p2` is to `p1`
    ///
    /// `None` when either lacks a serial, both are the same person, or no
    /// pattern matches.
    pub fn resolve(&self, p1: &Member, p2: &Member) -> Option<Relation> {
        let s1 = p1.ser_no.as_ref()?;
        let s2 = p2.ser_no.as_ref()?;
        if s1 == s2 {
            return None;
        }

        // 1. spouse
        if p1.spouse_ser_no.as_ref() == Some(s2) || p2.spouse_ser_no.as_ref() == Some(s1) {
            return Some(Relation::Spouse);
        }

        // 2. direct backlinks
        if p1.father_ser_no.as_ref() == Some(s2) {
            return Some(Relation::Father);
        }
        if p1.mother_ser_no.as_ref() == Some(s2) {
            return Some(Relation::Mother);
        }
        if p2.father_ser_no.as_ref() == Some(s1) || p2.mother_ser_no.as_ref() == Some(s1) {
            return Some(Relation::Child);
        }

        // 3. children lists
        if p1.lists_child(s2) {
            return Some(Relation::Child);
        }
        if p2.lists_child(s1) {
            return Some(if p2.is_female() {
                Relation::Mother
            } else {
                Relation::Father
            });
        }

        // 4. sibling
        if let (Some(f1), Some(f2)) = (&p1.father_ser_no, &p2.father_ser_no) {
            if f1 == f2 {
                return Some(Relation::Sibling);
            }
        }

        let father1 = self.father_of(p1);
        let father2 = self.father_of(p2);

        // 5. grandparent
        if father1.and_then(|f| f.father_ser_no.as_ref()) == Some(s2) {
            return Some(Relation::Grandparent);
        }
        if father2.and_then(|f| f.father_ser_no.as_ref()) == Some(s1) {
            return Some(Relation::Grandchild);
        }

        // 6. p2 is a sibling of p1's father, or p2's father is a sibling of p1
        if let Some(f1) = father1 {
            if same_father(p2, f1) {
                return Some(Relation::UncleAunt);
            }
        }
        if let Some(f2) = father2 {
            if same_father(f2, p1) {
                return Some(Relation::NephewNiece);
            }
        }

        // 7. cousin
        if let (Some(f1), Some(f2)) = (father1, father2) {
            if f1.ser_no != f2.ser_no && same_father(f1, f2) {
                return Some(Relation::Cousin);
            }
        }

        None
    }

    /// Every recognised relation of `focal`, list order
    ///
    /// Empty when `focal` is not in the partition.
    pub fn relationships_for(&self, focal: &SerialKey) -> Vec<RelatedMember> {
        let Some(p1) = self.get(focal) else {
            debug!("relationships_for: {} not in partition", focal);
            return Vec::new();
        };

        let related: Vec<RelatedMember> = self
            .unique_members()
            .filter_map(|p2| self.resolve(p1, p2).map(|r| RelatedMember::new(p2.clone(), r)))
            .collect();
        debug!("relationships_for: {} has {} relations", focal, related.len());
        related
    }

    /// Relationship list for every member with a serial
    pub fn relationship_matrix(&self) -> BTreeMap<SerialKey, Vec<RelatedMember>> {
        let focals: Vec<&SerialKey> = self.unique_members().filter_map(|m| m.ser_no.as_ref()).collect();
        focals
            .into_par_iter()
            .map(|s| (s.clone(), self.relationships_for(s)))
            .collect()
    }

    /// Members with a serial, first occurrence per serial
    fn unique_members(&self) -> impl Iterator<Item = &'a Member> + '_ {
        self.members.iter().enumerate().filter_map(move |(idx, m)| {
            let s = m.ser_no.as_ref()?;
            (self.by_serial.get(s) == Some(&idx)).then_some(m)
        })
    }
}

/// Both have the same non-null father and are different people
fn same_father(a: &Member, b: &Member) -> bool {
    match (&a.father_ser_no, &b.father_ser_no) {
        (Some(fa), Some(fb)) => fa == fb && a.ser_no != b.ser_no,
        _ => false,
    }
}

/// One-off lookup without keeping a resolver around
pub fn resolve_relationship(p1: &Member, p2: &Member, all: &[Member]) -> Option<Relation> {
    RelationshipResolver::new(all).resolve(p1, p2)
}
