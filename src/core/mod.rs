mod consts;
mod errors;
mod label;
mod model_helpers;
mod models;
mod update;

pub use consts::*;
pub use errors::HanoiError;
pub use models::{Disk, Move, Rod, Tower};
