pub mod destination_extractor;
pub mod droid;

pub use destination_extractor::*;
pub use droid::*;
