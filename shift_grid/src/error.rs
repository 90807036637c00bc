//! Error types for the shift grid app.

use thiserror::Error;

/// Top-level error returned from `main`
#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("failed to open window: {0}")]
    Ui(#[from] eframe::Error),
}

/// Grid state errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("({d_row}, {d_col}) is not a unit step or (0, 0)")]
    InvalidDirection { d_row: isize, d_col: isize },
}
