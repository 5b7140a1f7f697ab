use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{
    bbox::InBbox,
    entities::*,
    gateways::{AnnotationGateway, GatewayError},
};

/// In-memory gateway serving a fixed set of annotations and counting
/// how often it is consulted.
pub(crate) struct FixedGateway {
    annotations: Vec<UserAnnotation>,
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl FixedGateway {
    pub fn with_annotations(annotations: Vec<UserAnnotation>) -> Self {
        Self {
            annotations,
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        let gateway = Self::with_annotations(vec![]);
        gateway.set_fail(true);
        gateway
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnnotationGateway for FixedGateway {
    type Annotation = UserAnnotation;

    async fn annotations_within(
        &self,
        bbox: &MapBbox,
    ) -> Result<Vec<UserAnnotation>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(GatewayError::Unavailable);
        }
        Ok(self
            .annotations
            .iter()
            .filter(|a| a.in_bbox(bbox))
            .cloned()
            .collect())
    }
}
