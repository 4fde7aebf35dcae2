pub mod gateway;
pub mod repo;

pub use gateway::{Gateway, GitCli};
pub use repo::GitRepo;
