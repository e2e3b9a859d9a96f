use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Order unavailable: {0}")]
    OrderUnavailable(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
