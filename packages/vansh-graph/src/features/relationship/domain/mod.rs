//! Relationship domain models

use serde::{Deserialize, Serialize};

use crate::shared::models::Member;

/// Relation of one member to another ("what p2 is to p1")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Spouse,
    Father,
    Mother,
    Child,
    Sibling,
    Grandparent,
    Grandchild,
    UncleAunt,
    NephewNiece,
    Cousin,
}

impl Relation {
    /// Gender-neutral label
    pub fn label(&self) -> &'static str {
        match self {
            Relation::Spouse => "Spouse",
            Relation::Father => "Father",
            Relation::Mother => "Mother",
            Relation::Child => "Son/Daughter",
            Relation::Sibling => "Sibling",
            Relation::Grandparent => "Grandparent",
            Relation::Grandchild => "Grandchild",
            Relation::UncleAunt => "Uncle/Aunt",
            Relation::NephewNiece => "Nephew/Niece",
            Relation::Cousin => "Cousin",
        }
    }

    /// Label specialised by the related member's gender, when known
    pub fn gendered_label(&self, related: &Member) -> &'static str {
        let (male, female) = match self {
            Relation::Spouse => ("Husband", "Wife"),
            Relation::Child => ("Son", "Daughter"),
            Relation::Sibling => ("Brother", "Sister"),
            Relation::Grandparent => ("Grandfather", "Grandmother"),
            Relation::Grandchild => ("Grandson", "Granddaughter"),
            Relation::UncleAunt => ("Uncle", "Aunt"),
            Relation::NephewNiece => ("Nephew", "Niece"),
            Relation::Father | Relation::Mother | Relation::Cousin => return self.label(),
        };
        if related.is_female() {
            female
        } else if related.is_male() {
            male
        } else {
            self.label()
        }
    }

    /// What p1 is to p2, given `self` is what p2 is to p1
    ///
    /// `p1` decides the parent side of `Child`.
    pub fn inverse(&self, p1: &Member) -> Relation {
        match self {
            Relation::Father | Relation::Mother => Relation::Child,
            Relation::Child if p1.is_female() => Relation::Mother,
            Relation::Child => Relation::Father,
            Relation::Grandparent => Relation::Grandchild,
            Relation::Grandchild => Relation::Grandparent,
            Relation::UncleAunt => Relation::NephewNiece,
            Relation::NephewNiece => Relation::UncleAunt,
            Relation::Spouse | Relation::Sibling | Relation::Cousin => *self,
        }
    }

    pub fn is_symmetric(&self) -> bool {
        matches!(self, Relation::Spouse | Relation::Sibling | Relation::Cousin)
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in a focal member's relationship list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedMember {
    pub member: Member,
    pub relation: Relation,
    pub label: String,
}

impl RelatedMember {
    pub fn new(member: Member, relation: Relation) -> Self {
        let label = relation.gendered_label(&member).to_string();
        Self {
            member,
            relation,
            label,
        }
    }
}
