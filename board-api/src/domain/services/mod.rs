mod entries;

pub use entries::*;
