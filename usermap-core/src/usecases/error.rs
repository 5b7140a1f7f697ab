use thiserror::Error;

use crate::gateways::GatewayError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Bounding box is invalid")]
    Bbox,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
