use thiserror::Error;
use usermap_entities as e;

use e::{
    annotation::UserAnnotation,
    geo::{Distance, MapPoint},
};

use crate::UserPinRecord;

/// Why a wire record could not be turned into an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Invalid position")]
    Position,
    #[error("Missing or empty nickname")]
    Nickname,
    #[error("Invalid distance")]
    Distance,
}

impl TryFrom<UserPinRecord> for UserAnnotation {
    type Error = RecordError;

    fn try_from(from: UserPinRecord) -> Result<Self, Self::Error> {
        let UserPinRecord {
            id,
            nickname,
            lat,
            lng,
            skills,
            status,
            distance,
        } = from;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(RecordError::Position)?;
        let nickname = nickname.trim().to_owned();
        if nickname.is_empty() {
            return Err(RecordError::Nickname);
        }
        let distance = distance
            .map(|meters| {
                if meters.is_finite() && meters >= 0.0 {
                    Ok(Distance::from_meters(meters))
                } else {
                    Err(RecordError::Distance)
                }
            })
            .transpose()?;
        Ok(Self {
            user_id: id.into(),
            pos,
            nickname,
            skills,
            status,
            distance,
        })
    }
}

impl From<UserAnnotation> for UserPinRecord {
    fn from(from: UserAnnotation) -> Self {
        let UserAnnotation {
            user_id,
            pos,
            nickname,
            skills,
            status,
            distance,
        } = from;
        Self {
            id: user_id.into(),
            nickname,
            lat: pos.lat().to_deg(),
            lng: pos.lng().to_deg(),
            skills,
            status,
            distance: distance.map(Distance::to_meters),
        }
    }
}
