//! # usermap-boundary
//!
//! Serializable, anemic data structures describing the wire records
//! user pins are exchanged as, plus fallible conversions into the
//! domain entities.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use self::conv::RecordError;

/// A user pin as delivered by the annotation service.
///
/// All validation happens when converting into
/// `usermap_entities::annotation::UserAnnotation`; this struct merely
/// mirrors the external field names.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPinRecord {
    pub id       : i64,
    pub nickname : String,
    pub lat      : f64,
    pub lng      : f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills   : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status   : Option<String>,
    /// Distance to the viewer in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance : Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_record_with_absent_optionals() {
        let json = r#"{"id":7,"nickname":"ada","lat":48.1,"lng":11.5,"unknown":true}"#;
        let record: UserPinRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.nickname, "ada");
        assert_eq!(record.skills, None);
        assert_eq!(record.status, None);
        assert_eq!(record.distance, None);
    }

    #[test]
    fn serialize_skips_absent_optionals() {
        let record = UserPinRecord {
            id: 7,
            nickname: "ada".into(),
            lat: 48.1,
            lng: 11.5,
            skills: None,
            status: None,
            distance: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("skills"));
        assert!(!json.contains("distance"));
    }
}
