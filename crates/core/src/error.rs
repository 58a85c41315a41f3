use crate::types::DbId;

/// Domain-level errors shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },
}
