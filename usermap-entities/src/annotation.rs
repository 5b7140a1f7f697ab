use std::fmt;

use crate::geo::{Distance, MapPoint};

/// Numeric user identifier assigned by the backend.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<UserId> for i64 {
    fn from(from: UserId) -> Self {
        from.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capability interface of everything that can be pinned on a map:
/// a position plus the two display lines of the callout.
pub trait Annotation {
    fn position(&self) -> MapPoint;

    fn title(&self) -> &str;

    fn subtitle(&self) -> Option<&str> {
        None
    }
}

/// A user pin on the map.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct UserAnnotation {
    pub user_id  : UserId,
    pub pos      : MapPoint,
    pub nickname : String,
    pub skills   : Option<String>,
    pub status   : Option<String>,
    pub distance : Option<Distance>,
}

impl UserAnnotation {
    /// Human-readable distance to the viewer, if known.
    pub fn distance_label(&self) -> Option<String> {
        self.distance.map(|d| d.to_string())
    }
}

impl Annotation for UserAnnotation {
    fn position(&self) -> MapPoint {
        self.pos
    }

    fn title(&self) -> &str {
        &self.nickname
    }

    fn subtitle(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
