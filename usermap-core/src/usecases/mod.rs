mod error;
mod load_dataset;

pub use self::{error::Error, load_dataset::*};

pub type Result<T> = std::result::Result<T, Error>;

mod prelude {
    pub use super::{error::Error, Result};
    pub use crate::{bbox::*, dataset::*, entities::*, gateways::*};
}
