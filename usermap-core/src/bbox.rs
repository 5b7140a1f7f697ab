use crate::entities::*;

// Prefetch margin around a requested viewport. Loading slightly more
// than the visible region lets small pans reuse the cached dataset.
const BBOX_LAT_DEG_EXT: f64 = 0.02;
const BBOX_LNG_DEG_EXT: f64 = 0.04;

pub fn extend_bbox(bbox: &MapBbox) -> MapBbox {
    let sw = bbox.southwest();
    let ne = bbox.northeast();
    // Latitudes clamp at the poles.
    let sw_lat = LatCoord::from_deg(sw.lat().to_deg() - BBOX_LAT_DEG_EXT);
    let ne_lat = LatCoord::from_deg(ne.lat().to_deg() + BBOX_LAT_DEG_EXT);
    // Longitudes wrap around the antimeridian; if the two margins
    // would meet on the far side the box spans all longitudes.
    let lng_span_deg = if bbox.crosses_antimeridian() {
        360.0 - (sw.lng().to_deg() - ne.lng().to_deg())
    } else {
        ne.lng().to_deg() - sw.lng().to_deg()
    };
    let (sw_lng, ne_lng) = if lng_span_deg + 2.0 * BBOX_LNG_DEG_EXT >= 360.0 {
        (LngCoord::min(), LngCoord::max())
    } else {
        (
            LngCoord::from_deg(sw.lng().to_deg() - BBOX_LNG_DEG_EXT),
            LngCoord::from_deg(ne.lng().to_deg() + BBOX_LNG_DEG_EXT),
        )
    };
    let extended = MapBbox::new(MapPoint::new(sw_lat, sw_lng), MapPoint::new(ne_lat, ne_lng));
    debug_assert!(extended.is_valid());
    debug_assert!(extended.contains_bbox(bbox));
    extended
}

pub trait InBbox {
    fn in_bbox(&self, bbox: &MapBbox) -> bool;
}

impl<T: Annotation> InBbox for T {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(self.position())
    }
}

#[cfg(test)]
mod tests {

    use usermap_entities::builders::*;

    use super::*;

    #[test]
    fn is_in_bounding_box() {
        let bb = MapBbox::new(
            MapPoint::from_lat_lng_deg(-10.0, -10.0),
            MapPoint::from_lat_lng_deg(10.0, 10.0),
        );
        let a = UserAnnotation::build()
            .nickname("foo")
            .pos(MapPoint::from_lat_lng_deg(5.0, 5.0))
            .finish();
        assert!(a.in_bbox(&bb));
        let a = UserAnnotation::build()
            .nickname("foo")
            .pos(MapPoint::from_lat_lng_deg(10.1, 10.0))
            .finish();
        assert!(!a.in_bbox(&bb));
    }

    #[test]
    fn filter_by_bounding_box() {
        let bb = MapBbox::new(
            MapPoint::from_lat_lng_deg(-10.0, -10.0),
            MapPoint::from_lat_lng_deg(10.0, 10.0),
        );
        let annotations = vec![
            UserAnnotation::build()
                .pos(MapPoint::from_lat_lng_deg(5.0, 5.0))
                .finish(),
            UserAnnotation::build()
                .pos(MapPoint::from_lat_lng_deg(-5.0, 5.0))
                .finish(),
            UserAnnotation::build()
                .pos(MapPoint::from_lat_lng_deg(10.0, 10.1))
                .finish(),
        ];
        assert_eq!(annotations.iter().filter(|a| a.in_bbox(&bb)).count(), 2);
    }

    #[test]
    fn extend_contains_original() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(48.0, 11.0),
            MapPoint::from_lat_lng_deg(48.5, 11.8),
        );
        let ext_bbox = extend_bbox(&bbox);
        assert!(ext_bbox.contains_bbox(&bbox));
        assert!(!bbox.contains_bbox(&ext_bbox));
    }

    #[test]
    fn extend_max_bbox() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(-89.99, -179.97),
            MapPoint::from_lat_lng_deg(89.99, 179.97),
        );
        let ext_bbox = extend_bbox(&bbox);
        assert!(ext_bbox.is_valid());
        assert_eq!(ext_bbox.southwest().lat(), LatCoord::min());
        assert_eq!(ext_bbox.northeast().lat(), LatCoord::max());
        assert_eq!(ext_bbox.southwest().lng(), LngCoord::min());
        assert_eq!(ext_bbox.northeast().lng(), LngCoord::max());
    }
}
