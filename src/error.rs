use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlanceError>;

#[derive(Error, Debug)]
pub enum GlanceError {
    #[error("Not a git repository: {}", .0.display())]
    NotARepository(PathBuf),
    #[error("Git discover error: {0}")]
    Discover(#[from] Box<gix::discover::Error>),
    #[error("git {command} failed: {message}")]
    Query { command: String, message: String },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Manual From implementation for unboxed to boxed conversion
impl From<gix::discover::Error> for GlanceError {
    fn from(err: gix::discover::Error) -> Self {
        GlanceError::Discover(Box::new(err))
    }
}

impl GlanceError {
    pub fn query(args: &[&str], message: impl Into<String>) -> Self {
        GlanceError::Query {
            command: args.join(" "),
            message: message.into(),
        }
    }
}
