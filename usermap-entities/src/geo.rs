use std::{fmt, str::FromStr};

use thiserror::Error;

const MICRO_DEG_SCALE: f64 = 1_000_000.0;

const LAT_MAX_MICRO_DEG: i32 = 90_000_000;
const LNG_MAX_MICRO_DEG: i32 = 180_000_000;

// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Latitude in the closed range [-90°, +90°].
///
/// Stored as micro-degrees to keep the representation exact,
/// totally ordered and hashable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LatCoord(i32);

impl LatCoord {
    pub const fn min() -> Self {
        Self(-LAT_MAX_MICRO_DEG)
    }

    pub const fn max() -> Self {
        Self(LAT_MAX_MICRO_DEG)
    }

    /// Converts degrees into a latitude, clamping the value into
    /// the valid range. Non-finite input collapses to the equator.
    pub fn from_deg(deg: f64) -> Self {
        let deg = deg.clamp(-90.0, 90.0);
        Self((deg * MICRO_DEG_SCALE).round() as i32)
    }

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        if deg.is_finite() && (-90.0..=90.0).contains(&deg) {
            Some(Self::from_deg(deg))
        } else {
            None
        }
    }

    pub fn to_deg(self) -> f64 {
        f64::from(self.0) / MICRO_DEG_SCALE
    }
}

/// Longitude in the closed range [-180°, +180°].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LngCoord(i32);

impl LngCoord {
    pub const fn min() -> Self {
        Self(-LNG_MAX_MICRO_DEG)
    }

    pub const fn max() -> Self {
        Self(LNG_MAX_MICRO_DEG)
    }

    /// Converts degrees into a longitude, wrapping out-of-range
    /// values around the antimeridian. Non-finite input collapses
    /// to the prime meridian.
    pub fn from_deg(deg: f64) -> Self {
        let mut deg = deg % 360.0;
        if deg > 180.0 {
            deg -= 360.0;
        } else if deg < -180.0 {
            deg += 360.0;
        }
        Self((deg * MICRO_DEG_SCALE).round() as i32)
    }

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        if deg.is_finite() && (-180.0..=180.0).contains(&deg) {
            Some(Self::from_deg(deg))
        } else {
            None
        }
    }

    pub fn to_deg(self) -> f64 {
        f64::from(self.0) / MICRO_DEG_SCALE
    }
}

/// A point in map projection coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    /// Saturating conversion from degrees, see [`LatCoord::from_deg`]
    /// and [`LngCoord::from_deg`].
    pub fn from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Self {
        Self::new(LatCoord::from_deg(lat_deg), LngCoord::from_deg(lng_deg))
    }

    /// Validating conversion from degrees.
    pub fn try_from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Option<Self> {
        let lat = LatCoord::try_from_deg(lat_deg)?;
        let lng = LngCoord::try_from_deg(lng_deg)?;
        Some(Self::new(lat, lng))
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    /// Great-circle distance to another point (haversine formula).
    pub fn distance(self, other: Self) -> Distance {
        let lat1 = self.lat.to_deg().to_radians();
        let lat2 = other.lat.to_deg().to_radians();
        let dlat = (other.lat.to_deg() - self.lat.to_deg()).to_radians();
        let dlng = (other.lng.to_deg() - self.lng.to_deg()).to_radians();

        let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_meters(EARTH_RADIUS_M * c)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat.to_deg(), self.lng.to_deg())
    }
}

/// A distance in meters.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub fn from_meters(meters: f64) -> Self {
        debug_assert!(meters.is_finite() && meters >= 0.0);
        Self(meters)
    }

    pub fn to_meters(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 < 1_000.0 {
            write!(f, "{:.0} m", self.0)
        } else {
            write!(f, "{:.1} km", self.0 / 1_000.0)
        }
    }
}

/// A bounding box in map projection coordinates, described by its
/// southwest and northeast corners.
///
/// Boxes that cross the antimeridian are represented by a southwest
/// longitude greater than the northeast longitude.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.lat() <= self.ne.lat()
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.sw.lng() > self.ne.lng()
    }

    fn covers_all_longitudes(&self) -> bool {
        self.sw.lng() == LngCoord::min() && self.ne.lng() == LngCoord::max()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.crosses_antimeridian() {
            pt.lng() >= self.sw.lng() || pt.lng() <= self.ne.lng()
        } else {
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        }
    }

    pub fn contains_bbox(&self, other: &MapBbox) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        if other.sw.lat() < self.sw.lat() || other.ne.lat() > self.ne.lat() {
            return false;
        }
        match (self.crosses_antimeridian(), other.crosses_antimeridian()) {
            (false, false) => {
                self.sw.lng() <= other.sw.lng() && other.ne.lng() <= self.ne.lng()
            }
            // The other box must fit entirely into either the eastern
            // or the western arm.
            (true, false) => {
                other.sw.lng() >= self.sw.lng() || other.ne.lng() <= self.ne.lng()
            }
            (true, true) => {
                other.sw.lng() >= self.sw.lng() && other.ne.lng() <= self.ne.lng()
            }
            (false, true) => self.covers_all_longitudes(),
        }
    }

    pub fn center(&self) -> MapPoint {
        let lat_mid_deg = (self.sw.lat().to_deg() + self.ne.lat().to_deg()) / 2.0;
        let lng_mid_deg = if self.crosses_antimeridian() {
            let mid = (self.sw.lng().to_deg() + self.ne.lng().to_deg()) / 2.0 + 180.0;
            if mid > 180.0 {
                mid - 360.0
            } else {
                mid
            }
        } else {
            (self.sw.lng().to_deg() + self.ne.lng().to_deg()) / 2.0
        };
        MapPoint::from_lat_lng_deg(lat_mid_deg, lng_mid_deg)
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Invalid bounding box string")]
pub struct MapBboxParseError;

/// Parses `"sw_lat,sw_lng,ne_lat,ne_lng"` in degrees.
impl FromStr for MapBbox {
    type Err = MapBboxParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords: Vec<f64> = s
            .split(',')
            .map(|x| x.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| MapBboxParseError)?;
        let &[sw_lat, sw_lng, ne_lat, ne_lng] = coords.as_slice() else {
            return Err(MapBboxParseError);
        };
        let sw = MapPoint::try_from_lat_lng_deg(sw_lat, sw_lng).ok_or(MapBboxParseError)?;
        let ne = MapPoint::try_from_lat_lng_deg(ne_lat, ne_lng).ok_or(MapBboxParseError)?;
        let bbox = MapBbox::new(sw, ne);
        if !bbox.is_valid() {
            return Err(MapBboxParseError);
        }
        Ok(bbox)
    }
}
