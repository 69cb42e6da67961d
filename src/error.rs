use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinksecError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LinksecError>;
