use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template store error: {0}")]
    Store(#[from] StoreError),
}
