use crate::error::FixtureError;

pub type FixtureResult<T> = Result<T, FixtureError>;
