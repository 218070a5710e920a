//! External-branch policy
//!
//! A married-out daughter's children are recorded under her husband's family,
//! so traversal stops at her. Which members count as "external" is a clan
//! convention and is kept behind [`BranchPolicy`] so traversal never changes
//! when the convention does.

use crate::shared::models::{Member, DEFAULT_FEMALE_GENDERS};

/// Family surnames recognised by default (case-insensitive)
pub const DEFAULT_FAMILY_SURNAMES: &[&str] = &["Gogte", "Gogate"];

/// Decides whether a member's children leave the lineage
pub trait BranchPolicy: Send + Sync {
    fn is_external_branch(&self, member: &Member) -> bool;
}

impl<F> BranchPolicy for F
where
    F: Fn(&Member) -> bool + Send + Sync,
{
    fn is_external_branch(&self, member: &Member) -> bool {
        self(member)
    }
}

/// Female member whose last name is not a family surname
///
/// A missing last name counts as "not a family surname".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurnameBranchPolicy {
    family_surnames: Vec<String>,
    female_genders: Vec<String>,
}

impl SurnameBranchPolicy {
    pub fn new<S: AsRef<str>>(family_surnames: &[S], female_genders: &[S]) -> Self {
        Self {
            family_surnames: lowered(family_surnames),
            female_genders: lowered(female_genders),
        }
    }

    pub fn with_surnames<S: AsRef<str>>(family_surnames: &[S]) -> Self {
        Self {
            family_surnames: lowered(family_surnames),
            female_genders: lowered(DEFAULT_FEMALE_GENDERS),
        }
    }

    pub fn family_surnames(&self) -> &[String] {
        &self.family_surnames
    }

    fn is_female(&self, member: &Member) -> bool {
        member
            .gender_str()
            .map(|g| self.female_genders.contains(&g.trim().to_lowercase()))
            .unwrap_or(false)
    }

    fn has_family_surname(&self, member: &Member) -> bool {
        member
            .last_name()
            .map(|s| self.family_surnames.contains(&s.trim().to_lowercase()))
            .unwrap_or(false)
    }
}

impl Default for SurnameBranchPolicy {
    fn default() -> Self {
        Self::with_surnames(DEFAULT_FAMILY_SURNAMES)
    }
}

impl BranchPolicy for SurnameBranchPolicy {
    fn is_external_branch(&self, member: &Member) -> bool {
        self.is_female(member) && !self.has_family_surname(member)
    }
}

/// Never cuts a branch
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExternalBranches;

impl BranchPolicy for NoExternalBranches {
    fn is_external_branch(&self, _member: &Member) -> bool {
        false
    }
}

fn lowered<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_surnames() {
        let policy = SurnameBranchPolicy::default();
        let daughter = Member::with_ser_no(1).named("Asha", "GOGATE").gender("female");
        let married_out = Member::with_ser_no(2).named("Asha", "Smith").gender("Female");
        let son = Member::with_ser_no(3).named("Ravi", "Smith").gender("male");

        assert!(!policy.is_external_branch(&daughter));
        assert!(policy.is_external_branch(&married_out));
        assert!(!policy.is_external_branch(&son));
    }

    #[test]
    fn test_missing_last_name_counts_as_external_for_females() {
        let policy = SurnameBranchPolicy::default();
        let mut m = Member::with_ser_no(1).gender("F");
        m.personal_details.first_name = Some("Usha".into());
        assert!(policy.is_external_branch(&m));

        // unknown gender never cuts
        assert!(!policy.is_external_branch(&Member::with_ser_no(2)));
    }

    #[test]
    fn test_custom_surnames() {
        let policy = SurnameBranchPolicy::with_surnames(&["Joshi"]);
        let m = Member::with_ser_no(1).named("Lata", "joshi").gender("female");
        assert!(!policy.is_external_branch(&m));
        assert_eq!(policy.family_surnames(), &["joshi".to_string()]);
    }

    #[test]
    fn test_closure_policy() {
        let policy = |m: &Member| m.level == Some(9);
        let mut m = Member::with_ser_no(1);
        assert!(!policy.is_external_branch(&m));
        m.level = Some(9);
        assert!(policy.is_external_branch(&m));
        assert!(!NoExternalBranches.is_external_branch(&m));
    }
}
