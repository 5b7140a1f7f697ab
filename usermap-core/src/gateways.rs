use std::{future::Future, io};

use thiserror::Error;

use crate::entities::MapBbox;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("The annotation source is not available")]
    Unavailable,
    #[error("Malformed annotation record: {0}")]
    MalformedRecord(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Seam for fetching the annotations covering a map region.
///
/// Implementations fetch from wherever the annotations live (a remote
/// service, a file, a database). The returned future resolves exactly
/// once with either the complete result or an error; dropping it
/// abandons the request without observable side effects.
pub trait AnnotationGateway {
    type Annotation: Send;

    fn annotations_within(
        &self,
        bbox: &MapBbox,
    ) -> impl Future<Output = Result<Vec<Self::Annotation>, GatewayError>> + Send;
}
