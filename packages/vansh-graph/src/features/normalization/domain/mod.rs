//! Normalization domain rules
//!
//! Pure functions only: alias tables, the presence rule, identity keys and
//! completeness scoring. Ingestion and merging live in `infrastructure`.

use serde_json::Value;

use crate::shared::models::Member;

// ============================================================
// Field Aliases
// ============================================================

/// Serial-number aliases; these also make a member a hierarchy participant
pub const SERIAL_ALIASES: &[&str] = &[
    "serNo",
    "sNo",
    "serialNo",
    "serialNumber",
    "memberSerialNumber",
];

/// Store-level ids; identity only
pub const DOCUMENT_ID_ALIASES: &[&str] = &["_id", "id", "uuid", "uniqueId"];

pub const FATHER_ALIASES: &[&str] = &["fatherSerNo", "fatherSNo", "fatherSerialNo"];
pub const MOTHER_ALIASES: &[&str] = &["motherSerNo", "motherSNo", "motherSerialNo"];
pub const SPOUSE_ALIASES: &[&str] = &["spouseSerNo", "spouseSNo", "spouseSerialNo"];
pub const CHILDREN_ALIASES: &[&str] = &["childrenSerNos", "childrenSerNo"];
pub const SON_DAUGHTER_ALIASES: &[&str] = &["sonDaughterSerNo", "sonDaughterSerNos"];

pub const FIRST_NAME_ALIASES: &[&str] = &["firstName", "first_name", "fname"];
pub const MIDDLE_NAME_ALIASES: &[&str] = &["middleName", "middle_name", "mname"];
pub const LAST_NAME_ALIASES: &[&str] = &["lastName", "last_name", "lname", "surname"];
pub const GENDER_ALIASES: &[&str] = &["gender", "sex"];
pub const DOB_ALIASES: &[&str] = &["dateOfBirth", "dob", "birthDate"];
pub const EMAIL_ALIASES: &[&str] = &["email", "emailId", "emailAddress"];
pub const MOBILE_ALIASES: &[&str] = &["mobileNumber", "mobile", "phone", "phoneNumber", "contactNumber"];
pub const IMAGE_ALIASES: &[&str] = &["profileImage", "profileImageUrl", "profilePhoto", "photo", "image"];
pub const ALIVE_ALIASES: &[&str] = &["isAlive", "alive"];
pub const STATUS_ALIASES: &[&str] = &["status", "lifeStatus"];

pub const SPOUSE_FIRST_NAME_ALIASES: &[&str] = &["spouseFirstName", "spouse_first_name"];
pub const SPOUSE_MIDDLE_NAME_ALIASES: &[&str] = &["spouseMiddleName", "spouse_middle_name"];
pub const SPOUSE_LAST_NAME_ALIASES: &[&str] = &["spouseLastName", "spouse_last_name"];
pub const SPOUSE_MOBILE_ALIASES: &[&str] = &["spouseMobileNumber", "spouseMobile"];
pub const MARRIAGE_DATE_ALIASES: &[&str] = &["dateOfMarriage", "marriageDate"];

// ============================================================
// Presence Rule
// ============================================================

/// A value is present unless null, a blank string, or an empty array
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

// ============================================================
// Completeness Score
// ============================================================

/// Completeness weights
pub mod weights {
    pub const FATHER: u32 = 4;
    pub const MOTHER: u32 = 3;
    pub const SPOUSE: u32 = 2;
    pub const CHILDREN: u32 = 5;
    pub const SON_DAUGHTER: u32 = 2;
    pub const LEVEL: u32 = 1;
    pub const VANSH: u32 = 1;
    pub const FIRST_NAME: u32 = 1;
    pub const LAST_NAME: u32 = 1;
}

/// How informative a record is; the higher-scoring duplicate becomes the merge base
pub fn completeness_score(member: &Member) -> u32 {
    let details = &member.personal_details;
    [
        (member.father_ser_no.is_some(), weights::FATHER),
        (member.mother_ser_no.is_some(), weights::MOTHER),
        (member.spouse_ser_no.is_some(), weights::SPOUSE),
        (!member.children_ser_nos.is_empty(), weights::CHILDREN),
        (!member.son_daughter_ser_no.is_empty(), weights::SON_DAUGHTER),
        (member.level.is_some(), weights::LEVEL),
        (member.vansh.is_some(), weights::VANSH),
        (details.first_name.is_some(), weights::FIRST_NAME),
        (details.last_name.is_some(), weights::LAST_NAME),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, weight)| weight)
    .sum()
}

// ============================================================
// Identity Key
// ============================================================

/// Per-member dedup key
///
/// Serial number first, then the store-level id, then a composite of
/// (full name, spouse name, vansh), lowercased and serialized as a JSON array.
pub fn identity_key(member: &Member) -> String {
    if let Some(ser_no) = &member.ser_no {
        return ser_no.as_key();
    }
    if let Some(doc_id) = &member.document_id {
        return doc_id.as_key();
    }
    let composite = [
        member.full_name().to_lowercase(),
        member.spouse_name().to_lowercase(),
        member
            .vansh
            .as_deref()
            .map(|v| v.trim().to_lowercase())
            .unwrap_or_default(),
    ];
    serde_json::to_string(&composite).unwrap_or_else(|_| composite.join("|"))
}
