use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SingletonError {
    #[error("cannot pass arguments into an already instantiated singleton ({singleton})")]
    InvalidUsage { singleton: &'static str },
}

pub type SingletonResult<T> = Result<T, SingletonError>;
