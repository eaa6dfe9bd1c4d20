use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, CalcError>;
