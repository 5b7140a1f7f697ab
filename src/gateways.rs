use std::path::{Path, PathBuf};

use log::debug;

use usermap_boundary::UserPinRecord;
use usermap_core::{
    bbox::InBbox,
    entities::{MapBbox, UserAnnotation},
    gateways::{AnnotationGateway, GatewayError},
};

pub async fn read_records(path: &Path) -> Result<Vec<UserPinRecord>, GatewayError> {
    let json = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&json).map_err(|err| GatewayError::MalformedRecord(err.to_string()))
}

/// File-backed stand-in for the remote annotation service.
///
/// Reads the whole records file on every request; the dataset cache
/// in front of it keeps that from happening on every pan.
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AnnotationGateway for JsonFileGateway {
    type Annotation = UserAnnotation;

    async fn annotations_within(
        &self,
        bbox: &MapBbox,
    ) -> Result<Vec<UserAnnotation>, GatewayError> {
        let records = read_records(&self.path).await?;
        let center = bbox.center();
        let mut annotations = Vec::with_capacity(records.len());
        for record in records {
            let mut annotation = UserAnnotation::try_from(record)
                .map_err(|err| GatewayError::MalformedRecord(err.to_string()))?;
            if annotation.in_bbox(bbox) {
                if annotation.distance.is_none() {
                    annotation.distance = Some(annotation.pos.distance(center));
                }
                annotations.push(annotation);
            }
        }
        debug!(
            "{} of the records are inside {bbox}",
            annotations.len()
        );
        Ok(annotations)
    }
}
