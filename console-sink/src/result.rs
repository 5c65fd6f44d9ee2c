//! [`Result`] enum encapsulating the sink [`Error`](crate::error::Error) enum

pub type Result<T> = std::result::Result<T, crate::error::Error>;
