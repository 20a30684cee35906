// Wire types for the realm status endpoint.
// Decoding is lenient: unknown fields are skipped, keys match regardless of
// case, and missing or null fields fall back to zero values, so a sparse
// realm object still decodes.

use std::io::Read;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Root object returned by `/api/wow/realm/status`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Response {
    #[serde(rename = "Realms", alias = "realms")]
    pub realms: Vec<Realm>,
}

impl Response {
    /// Decode the first JSON value in `reader`. Anything after it is left
    /// unread.
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        let value = Value::deserialize(&mut de)?;
        match normalize(value) {
            Value::Null => Ok(Response::default()),
            value => Response::deserialize(value),
        }
    }
}

/// Lowercase object keys and drop null members so they take their zero
/// value. Null array elements become empty objects.
fn normalize(value: Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.to_lowercase(), normalize(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Null => Value::Object(Map::new()),
                    item => normalize(item),
                })
                .collect(),
        ),
        other => other,
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Realm {
    #[serde(rename = "type")]
    pub realm_type: String,
    pub queue: bool,
    pub wintergrasp: PvPZone,
    #[serde(rename = "tol-barad")]
    pub tol_barad: PvPZone,
    /// `true` when the realm is online.
    pub status: bool,
    pub population: String,
    pub name: String,
    pub slug: String,
    pub battlegroup: String,
}

/// A contested zone with a scheduled battle.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PvPZone {
    pub area: i64,
    #[serde(rename = "controlling-faction")]
    pub controlling_faction: Faction,
    pub status: ZoneStatus,
    /// Start of the next battle, epoch milliseconds.
    pub next: i64,
}

/// Raw faction code. Which name a code carries depends on the label set,
/// see [`crate::labels::LabelSet::faction`].
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct Faction(pub i64);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStatus {
    Unknown,
    #[default]
    Idle,
    Populating,
    Active,
    Concluded,
    Unrecognized(i64),
}

impl ZoneStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            -1 => ZoneStatus::Unknown,
            0 => ZoneStatus::Idle,
            1 => ZoneStatus::Populating,
            2 => ZoneStatus::Active,
            3 => ZoneStatus::Concluded,
            other => ZoneStatus::Unrecognized(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ZoneStatus::Idle => "Idle",
            ZoneStatus::Populating => "Populating",
            ZoneStatus::Active => "Active",
            ZoneStatus::Concluded => "Concluded",
            ZoneStatus::Unknown | ZoneStatus::Unrecognized(_) => "Unknown",
        }
    }
}

impl<'de> Deserialize<'de> for ZoneStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(ZoneStatus::from_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> serde_json::Result<Response> {
        Response::from_reader(body.as_bytes())
    }

    #[test]
    fn decodes_full_realm() {
        let body = r#"{"Realms":[{
            "type":"pvp","queue":true,"status":false,"population":"Medium",
            "name":"Tichondrius","slug":"tichondrius","battlegroup":"Bloodlust",
            "wintergrasp":{"area":1,"controlling-faction":1,"status":2,"next":1700000000000},
            "tol-barad":{"area":21,"controlling-faction":0,"status":-1,"next":5}
        }]}"#;
        let resp = decode(body).unwrap();
        assert_eq!(resp.realms.len(), 1);
        let realm = &resp.realms[0];
        assert_eq!(realm.realm_type, "pvp");
        assert!(realm.queue);
        assert!(!realm.status);
        assert_eq!(realm.slug, "tichondrius");
        assert_eq!(realm.wintergrasp.controlling_faction, Faction(1));
        assert_eq!(realm.wintergrasp.status, ZoneStatus::Active);
        assert_eq!(realm.wintergrasp.next, 1_700_000_000_000);
        assert_eq!(realm.tol_barad.area, 21);
        assert_eq!(realm.tol_barad.status, ZoneStatus::Unknown);
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let body = r#"{"Realms":[{"name":"Proudmoore","tol-barad":{"next":0}}]}"#;
        let resp = decode(body).unwrap();
        let realm = &resp.realms[0];
        assert_eq!(realm.name, "Proudmoore");
        assert!(!realm.queue);
        assert_eq!(realm.battlegroup, "");
        assert_eq!(realm.wintergrasp, PvPZone::default());
        assert_eq!(realm.tol_barad.status, ZoneStatus::Idle);
    }

    #[test]
    fn ignores_unknown_fields_and_accepts_lowercase_root() {
        let body = r#"{"realms":[{"name":"A","locale":"en_US"},{"name":"B"}],"extra":1}"#;
        let resp = decode(body).unwrap();
        let names: Vec<_> = resp.realms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn unrecognized_zone_status_is_kept_and_labelled_unknown() {
        let status = ZoneStatus::from_code(9);
        assert_eq!(status, ZoneStatus::Unrecognized(9));
        assert_eq!(status.label(), "Unknown");
        assert_eq!(ZoneStatus::from_code(1).label(), "Populating");
    }

    #[test]
    fn truncated_body_is_an_error() {
        let body = r#"{"Realms":[{"name":"Proud"#;
        assert!(decode(body).is_err());
    }

    #[test]
    fn keys_match_regardless_of_case() {
        let body = r#"{"REALMS":[{"Name":"A","Status":true,"Type":"pve",
            "Tol-Barad":{"Controlling-Faction":1,"Next":5}}]}"#;
        let resp = decode(body).unwrap();
        let realm = &resp.realms[0];
        assert_eq!(realm.name, "A");
        assert!(realm.status);
        assert_eq!(realm.realm_type, "pve");
        assert_eq!(realm.tol_barad.controlling_faction, Faction(1));
        assert_eq!(realm.tol_barad.next, 5);
    }

    #[test]
    fn null_members_take_zero_values() {
        let body = r#"{"Realms":[{"name":"A","battlegroup":null,"wintergrasp":null,
            "tol-barad":{"status":null,"next":7}},null]}"#;
        let resp = decode(body).unwrap();
        assert_eq!(resp.realms.len(), 2);
        assert_eq!(resp.realms[0].battlegroup, "");
        assert_eq!(resp.realms[0].wintergrasp, PvPZone::default());
        assert_eq!(resp.realms[0].tol_barad.status, ZoneStatus::Idle);
        assert_eq!(resp.realms[0].tol_barad.next, 7);
        assert_eq!(resp.realms[1], Realm::default());

        assert!(decode(r#"{"Realms":null}"#).unwrap().realms.is_empty());
        assert!(decode("null").unwrap().realms.is_empty());
    }

    #[test]
    fn trailing_data_after_first_value_is_ignored() {
        let body = "{\"Realms\":[{\"name\":\"A\"}]}\n{\"x\":1} trailing";
        let resp = decode(body).unwrap();
        assert_eq!(resp.realms.len(), 1);
        assert_eq!(resp.realms[0].name, "A");
    }

    #[test]
    fn wrong_types_are_still_errors() {
        assert!(decode(r#"{"Realms":[{"name":5}]}"#).is_err());
        assert!(decode(r#"{"Realms":{}}"#).is_err());
    }
}
