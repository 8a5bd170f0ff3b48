mod charter;
mod geocode;

pub use charter::{artifact_path, Charter, NO_IMAGE};
pub use geocode::geocode;
