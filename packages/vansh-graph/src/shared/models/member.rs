//! Canonical member record

use serde::{Deserialize, Serialize};

use super::serial_key::SerialKey;

/// Genders that count as female for the external-branch rule
pub const DEFAULT_FEMALE_GENDERS: &[&str] = &["female", "f"];

/// Personal attribute bag
///
/// Ingestion fills these from `personalDetails` first and legacy top-level
/// fields second. Empty strings never reach this struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_alive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Spouse description for spouses that may not be members themselves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriedDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_marriage: Option<String>,
}

impl MarriedDetails {
    pub fn is_empty(&self) -> bool {
        *self == MarriedDetails::default()
    }
}

/// One logical person
///
/// # Invariants
///
/// 1. Only members with `ser_no` take part in hierarchy lookups
/// 2. After deduplication `children_ser_nos == son_daughter_ser_no` (same set, same order)
/// 3. Relation fields are already normalized; compare them with `==`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ser_no: Option<SerialKey>,

    /// Store-level id (`_id`, `id`, `uuid`, `uniqueId`); identity only, never a backlink target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<SerialKey>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_ser_no: Option<SerialKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_ser_no: Option<SerialKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_ser_no: Option<SerialKey>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children_ser_nos: Vec<SerialKey>,
    /// Legacy alias of `children_ser_nos`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub son_daughter_ser_no: Vec<SerialKey>,

    /// Generation hint from upstream data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vansh: Option<String>,

    #[serde(default)]
    pub personal_details: PersonalDetails,

    #[serde(default, skip_serializing_if = "MarriedDetails::is_empty")]
    pub married_details: MarriedDetails,
}

impl Member {
    /// Member with only a serial number (test and fixture helper)
    pub fn with_ser_no(ser_no: impl Into<SerialKey>) -> Self {
        Self {
            ser_no: Some(ser_no.into()),
            ..Default::default()
        }
    }

    pub fn father(mut self, ser_no: impl Into<SerialKey>) -> Self {
        self.father_ser_no = Some(ser_no.into());
        self
    }

    pub fn mother(mut self, ser_no: impl Into<SerialKey>) -> Self {
        self.mother_ser_no = Some(ser_no.into());
        self
    }

    pub fn spouse(mut self, ser_no: impl Into<SerialKey>) -> Self {
        self.spouse_ser_no = Some(ser_no.into());
        self
    }

    pub fn named(mut self, first: &str, last: &str) -> Self {
        self.personal_details.first_name = Some(first.to_string());
        self.personal_details.last_name = Some(last.to_string());
        self
    }

    pub fn gender(mut self, gender: &str) -> Self {
        self.personal_details.gender = Some(gender.to_string());
        self
    }

    pub fn in_vansh(mut self, vansh: &str) -> Self {
        self.vansh = Some(vansh.to_string());
        self
    }

    /// First, middle and last name joined by single spaces
    pub fn full_name(&self) -> String {
        let d = &self.personal_details;
        join_names(&[&d.first_name, &d.middle_name, &d.last_name])
    }

    /// Spouse name from `married_details`
    pub fn spouse_name(&self) -> String {
        let m = &self.married_details;
        join_names(&[&m.spouse_first_name, &m.spouse_middle_name, &m.spouse_last_name])
    }

    /// Union of both children aliases, first-seen order
    pub fn children(&self) -> Vec<SerialKey> {
        let mut out: Vec<SerialKey> = Vec::new();
        for key in self.children_ser_nos.iter().chain(&self.son_daughter_ser_no) {
            if !out.contains(key) {
                out.push(key.clone());
            }
        }
        out
    }

    pub fn lists_child(&self, ser_no: &SerialKey) -> bool {
        self.children_ser_nos.contains(ser_no) || self.son_daughter_ser_no.contains(ser_no)
    }

    pub fn last_name(&self) -> Option<&str> {
        self.personal_details.last_name.as_deref()
    }

    pub fn gender_str(&self) -> Option<&str> {
        self.personal_details.gender.as_deref()
    }

    /// Gender matches one of `DEFAULT_FEMALE_GENDERS` (case-insensitive)
    pub fn is_female(&self) -> bool {
        self.gender_str()
            .map(|g| {
                let g = g.trim().to_lowercase();
                DEFAULT_FEMALE_GENDERS.contains(&g.as_str())
            })
            .unwrap_or(false)
    }

    pub fn is_male(&self) -> bool {
        self.gender_str()
            .map(|g| matches!(g.trim().to_lowercase().as_str(), "male" | "m"))
            .unwrap_or(false)
    }

    /// Short display label: name, else serial, else "unknown"
    pub fn display_name(&self) -> String {
        let name = self.full_name();
        if !name.is_empty() {
            return name;
        }
        self.ser_no
            .as_ref()
            .map(|s| format!("#{}", s))
            .unwrap_or_else(|| "unknown".to_string())
    }
}

fn join_names(parts: &[&Option<String>]) -> String {
    parts
        .iter()
        .filter_map(|p| p.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
