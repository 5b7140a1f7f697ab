use log::debug;
use time::Duration;

use crate::{
    dataset::MapDataSet,
    entities::MapBbox,
    gateways::AnnotationGateway,
    usecases::{self, Result},
};

/// How long a cached dataset may be served before it is reloaded
/// even though it still covers the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreshnessPolicy {
    /// `None` keeps datasets forever.
    pub max_age: Option<Duration>,
}

impl FreshnessPolicy {
    pub fn is_fresh<A>(&self, dataset: &MapDataSet<A>) -> bool {
        self.max_age.is_none_or(|max_age| dataset.age() <= max_age)
    }
}

/// Caller-side cache of the most recently loaded dataset.
///
/// Holds at most one dataset and reuses it as long as it covers the
/// requested viewport and satisfies the freshness policy.
pub struct DatasetCache<G: AnnotationGateway> {
    gateway: G,
    policy: FreshnessPolicy,
    current: Option<MapDataSet<G::Annotation>>,
}

impl<G: AnnotationGateway> DatasetCache<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_policy(gateway, FreshnessPolicy::default())
    }

    pub fn with_policy(gateway: G, policy: FreshnessPolicy) -> Self {
        Self {
            gateway,
            policy,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&MapDataSet<G::Annotation>> {
        self.current.as_ref()
    }

    /// Seeds the cache with a previously persisted dataset.
    pub fn restore(&mut self, dataset: MapDataSet<G::Annotation>) {
        self.current = Some(dataset);
    }

    pub fn invalidate(&mut self) {
        self.current = None;
    }

    /// Returns a dataset covering the viewport, reusing the cached
    /// one when possible.
    ///
    /// When a reload fails the previously cached dataset is kept, so
    /// a viewport it still covers can be served after the error.
    pub async fn ensure_coverage(
        &mut self,
        viewport: MapBbox,
    ) -> Result<&MapDataSet<G::Annotation>> {
        let dataset = match self.current.take() {
            Some(current)
                if current.is_valid_for(&viewport) && self.policy.is_fresh(&current) =>
            {
                debug!(
                    "Viewport {viewport} is covered by the dataset loaded at {}",
                    current.loaded_at()
                );
                current
            }
            stale => match usecases::load_dataset(&self.gateway, viewport).await {
                Ok(dataset) => dataset,
                Err(err) => {
                    self.current = stale;
                    return Err(err);
                }
            },
        };
        Ok(self.current.insert(dataset))
    }
}
