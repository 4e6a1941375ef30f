use thiserror::Error;

pub type GsResult<T> = Result<T, GsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GsError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
