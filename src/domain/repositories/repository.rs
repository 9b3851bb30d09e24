use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("{table}:{id} does not exist")]
    MissingReference { table: &'static str, id: String },
    #[error("{table}.{field} is already taken")]
    Duplicate {
        table: &'static str,
        field: &'static str,
    },
    #[error("no record was returned after creating in {0}")]
    NotCreated(&'static str),
}
