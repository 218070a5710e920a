//! Ingestion - raw document → canonical `Member`
//!
//! All alias checking happens here, once. Downstream code only ever sees the
//! canonical field names of [`Member`].
//!
//! # Lookup order
//! - serial / store ids: top-level record, then `personalDetails`
//! - personal attributes: `personalDetails`, then legacy top-level fields
//! - spouse attributes: `marriedDetails`, then top-level fields

use serde_json::{Map, Value};

use crate::features::normalization::domain::*;
use crate::shared::models::{
    normalize_serial_key, normalize_serial_list, MarriedDetails, Member, PersonalDetails,
    SerialKey,
};

/// Ingest one raw document
///
/// Returns `None` for anything that is not a JSON object.
pub fn ingest_record(raw: &Value) -> Option<Member> {
    let top = raw.as_object()?;
    let details = top.get("personalDetails").and_then(Value::as_object);
    let married = top.get("marriedDetails").and_then(Value::as_object);

    // ids: top-level wins
    let id_scopes: Vec<&Map<String, Value>> = [Some(top), details].into_iter().flatten().collect();
    // attributes: nested wins
    let personal_scopes: Vec<&Map<String, Value>> =
        [details, Some(top)].into_iter().flatten().collect();
    let married_scopes: Vec<&Map<String, Value>> =
        [married, Some(top)].into_iter().flatten().collect();
    let spouse_scopes: Vec<&Map<String, Value>> =
        [Some(top), married, details].into_iter().flatten().collect();

    let personal_details = PersonalDetails {
        first_name: find_string(&personal_scopes, FIRST_NAME_ALIASES),
        middle_name: find_string(&personal_scopes, MIDDLE_NAME_ALIASES),
        last_name: find_string(&personal_scopes, LAST_NAME_ALIASES),
        gender: find_string(&personal_scopes, GENDER_ALIASES),
        date_of_birth: find_string(&personal_scopes, DOB_ALIASES),
        email: find_string(&personal_scopes, EMAIL_ALIASES),
        mobile_number: find_string(&personal_scopes, MOBILE_ALIASES),
        profile_image: find_string(&personal_scopes, IMAGE_ALIASES),
        is_alive: find_value(&personal_scopes, ALIVE_ALIASES).and_then(bool_of),
        status: find_string(&personal_scopes, STATUS_ALIASES),
    };

    let married_details = MarriedDetails {
        spouse_first_name: find_string(&married_scopes, SPOUSE_FIRST_NAME_ALIASES),
        spouse_middle_name: find_string(&married_scopes, SPOUSE_MIDDLE_NAME_ALIASES),
        spouse_last_name: find_string(&married_scopes, SPOUSE_LAST_NAME_ALIASES),
        spouse_mobile_number: find_string(&married_scopes, SPOUSE_MOBILE_ALIASES),
        date_of_marriage: find_string(&married_scopes, MARRIAGE_DATE_ALIASES),
    };

    Some(Member {
        ser_no: find_serial(&id_scopes, SERIAL_ALIASES),
        document_id: find_serial(&id_scopes, DOCUMENT_ID_ALIASES),
        father_ser_no: find_serial(&id_scopes, FATHER_ALIASES),
        mother_ser_no: find_serial(&id_scopes, MOTHER_ALIASES),
        spouse_ser_no: find_serial(&spouse_scopes, SPOUSE_ALIASES),
        children_ser_nos: find_serial_list(&id_scopes, CHILDREN_ALIASES),
        son_daughter_ser_no: find_serial_list(&id_scopes, SON_DAUGHTER_ALIASES),
        level: find_value(&id_scopes, &["level"]).and_then(int_of),
        vansh: find_string(&id_scopes, &["vansh"]),
        personal_details,
        married_details,
    })
}

/// First present value over scopes × aliases (scope-major order)
fn find_value<'a>(scopes: &[&'a Map<String, Value>], aliases: &[&str]) -> Option<&'a Value> {
    scopes.iter().find_map(|scope| {
        aliases
            .iter()
            .filter_map(|alias| scope.get(*alias))
            .find(|value| is_present(value))
    })
}

/// First alias that resolves to a key; unparseable values fall through
fn find_serial(scopes: &[&Map<String, Value>], aliases: &[&str]) -> Option<SerialKey> {
    scopes.iter().find_map(|scope| {
        aliases
            .iter()
            .filter_map(|alias| scope.get(*alias))
            .find_map(normalize_serial_key)
    })
}

fn find_serial_list(scopes: &[&Map<String, Value>], aliases: &[&str]) -> Vec<SerialKey> {
    scopes
        .iter()
        .find_map(|scope| {
            aliases
                .iter()
                .filter_map(|alias| scope.get(*alias))
                .map(normalize_serial_list)
                .find(|list| !list.is_empty())
        })
        .unwrap_or_default()
}

fn find_string(scopes: &[&Map<String, Value>], aliases: &[&str]) -> Option<String> {
    scopes.iter().find_map(|scope| {
        aliases
            .iter()
            .filter_map(|alias| scope.get(*alias))
            .find_map(string_of)
    })
}

fn string_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn int_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Object(_) => normalize_serial_key(value).and_then(|k| k.as_numeric()),
        _ => None,
    }
}

fn bool_of(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "alive" => Some(true),
            "false" | "no" | "deceased" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        _ => None,
    }
}
