use time::Duration;

use crate::{bbox::InBbox, entities::*};

/// A set of annotations covering a map region.
///
/// The set exclusively owns its annotations. Insertion order is
/// preserved and nothing is deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDataSet<A> {
    annotations: Vec<A>,
    covered: MapBbox,
    loaded_at: Timestamp,
}

impl<A> MapDataSet<A> {
    pub fn new(covered: MapBbox, annotations: Vec<A>) -> Self {
        Self::with_loaded_at(covered, annotations, Timestamp::now())
    }

    /// Restores a dataset with a known load time.
    pub fn with_loaded_at(covered: MapBbox, annotations: Vec<A>, loaded_at: Timestamp) -> Self {
        Self {
            annotations,
            covered,
            loaded_at,
        }
    }

    pub fn annotations(&self) -> &[A] {
        &self.annotations
    }

    pub fn into_annotations(self) -> Vec<A> {
        self.annotations
    }

    pub fn covered(&self) -> MapBbox {
        self.covered
    }

    pub fn loaded_at(&self) -> Timestamp {
        self.loaded_at
    }

    pub fn age(&self) -> Duration {
        Timestamp::now() - self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Whether this dataset can serve the given viewport without a
    /// reload, i.e. whether the covered region fully contains it.
    pub fn is_valid_for(&self, viewport: &MapBbox) -> bool {
        self.covered.contains_bbox(viewport)
    }
}

impl<A: Annotation> MapDataSet<A> {
    /// The annotations positioned inside a sub-region.
    pub fn annotations_in<'a>(&'a self, bbox: &'a MapBbox) -> impl Iterator<Item = &'a A> {
        self.annotations.iter().filter(move |a| a.in_bbox(bbox))
    }
}

#[cfg(test)]
mod tests {

    use usermap_entities::builders::*;

    use super::*;

    fn munich_bbox() -> MapBbox {
        MapBbox::new(
            MapPoint::from_lat_lng_deg(48.0, 11.3),
            MapPoint::from_lat_lng_deg(48.3, 11.8),
        )
    }

    #[test]
    fn valid_for_exact_and_contained_viewports() {
        let dataset: MapDataSet<UserAnnotation> = MapDataSet::new(munich_bbox(), vec![]);
        assert!(dataset.is_valid_for(&munich_bbox()));
        let inner = MapBbox::new(
            MapPoint::from_lat_lng_deg(48.1, 11.4),
            MapPoint::from_lat_lng_deg(48.2, 11.6),
        );
        assert!(dataset.is_valid_for(&inner));
    }

    #[test]
    fn invalid_for_disjoint_and_overlapping_viewports() {
        let dataset: MapDataSet<UserAnnotation> = MapDataSet::new(munich_bbox(), vec![]);
        let disjoint = MapBbox::new(
            MapPoint::from_lat_lng_deg(52.3, 13.0),
            MapPoint::from_lat_lng_deg(52.7, 13.8),
        );
        assert!(!dataset.is_valid_for(&disjoint));
        let overlapping = MapBbox::new(
            MapPoint::from_lat_lng_deg(48.2, 11.5),
            MapPoint::from_lat_lng_deg(48.5, 12.0),
        );
        assert!(!dataset.is_valid_for(&overlapping));
    }

    #[test]
    fn filter_annotations_by_sub_region() {
        let inside = UserAnnotation::build()
            .nickname("inside")
            .pos(MapPoint::from_lat_lng_deg(48.15, 11.5))
            .finish();
        let outside = UserAnnotation::build()
            .nickname("outside")
            .pos(MapPoint::from_lat_lng_deg(48.25, 11.7))
            .finish();
        let dataset = MapDataSet::new(munich_bbox(), vec![inside.clone(), outside]);
        let sub = MapBbox::new(
            MapPoint::from_lat_lng_deg(48.1, 11.4),
            MapPoint::from_lat_lng_deg(48.2, 11.6),
        );
        let filtered: Vec<_> = dataset.annotations_in(&sub).collect();
        assert_eq!(filtered, vec![&inside]);
    }

    #[test]
    fn age_of_restored_dataset() {
        let loaded_at = Timestamp::now() - Duration::minutes(5);
        let dataset: MapDataSet<UserAnnotation> =
            MapDataSet::with_loaded_at(munich_bbox(), vec![], loaded_at);
        assert!(dataset.age() >= Duration::minutes(5));
        assert_eq!(dataset.loaded_at(), loaded_at);
    }
}
