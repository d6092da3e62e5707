pub(crate) mod entries;
pub(crate) mod error;
pub(crate) mod pages;
pub(crate) mod seed;

pub(crate) use error::ApiError;
