use thiserror::Error;

use crate::types::{Panel, RequiredField};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("panel element missing: {0}")]
    MissingElement(Panel),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submit control missing")]
    MissingControl,
    #[error("required field is empty: {0}")]
    Validation(RequiredField),
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("submission already in progress")]
    Busy,
}
