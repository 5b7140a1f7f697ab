use log::debug;

use super::prelude::*;

/// Loads a fresh dataset covering the given viewport.
///
/// The viewport is padded with a prefetch margin before fetching, so
/// the resulting dataset also serves nearby viewports. Resolves
/// exactly once with either a fully populated dataset or an error;
/// cancellation is dropping the future.
pub async fn load_dataset<G: AnnotationGateway>(
    gateway: &G,
    viewport: MapBbox,
) -> Result<MapDataSet<G::Annotation>> {
    if !viewport.is_valid() {
        return Err(Error::Bbox);
    }
    let covered = extend_bbox(&viewport);
    let annotations = gateway.annotations_within(&covered).await?;
    debug!(
        "Loaded {} annotations covering {covered}",
        annotations.len()
    );
    Ok(MapDataSet::new(covered, annotations))
}
