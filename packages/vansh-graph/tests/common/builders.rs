//! Test data builders

use vansh_graph::shared::models::{Member, SerialKey};

/// Builder for a partition of canonical members
#[derive(Debug, Default)]
pub struct FamilyBuilder {
    members: Vec<Member>,
}

impl FamilyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Member without a father
    pub fn root(mut self, ser_no: i64) -> Self {
        self.members.push(Member::with_ser_no(ser_no));
        self
    }

    pub fn child(mut self, ser_no: i64, father: i64) -> Self {
        self.members.push(Member::with_ser_no(ser_no).father(father));
        self
    }

    /// Marks both members as each other's spouse
    pub fn married(mut self, a: i64, b: i64) -> Self {
        for (me, other) in [(a, b), (b, a)] {
            let key = SerialKey::Numeric(me);
            match self.members.iter_mut().find(|m| m.ser_no.as_ref() == Some(&key)) {
                Some(m) => m.spouse_ser_no = Some(SerialKey::Numeric(other)),
                None => self.members.push(Member::with_ser_no(me).spouse(other)),
            }
        }
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn build(self) -> Vec<Member> {
        self.members
    }
}
