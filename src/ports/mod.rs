mod banner;
mod git;
mod name_decision;
mod remote_repository;

pub use banner::{BannerPort, BannerRequest};
pub use git::GitPort;
pub use name_decision::{NameDecider, NameDecision};
pub use remote_repository::{RemoteRepositoryPort, RepositoryHandle};
