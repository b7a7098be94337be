//! Ports implemented by infrastructure crates

mod password;
mod repositories;

pub use password::PasswordEncoder;
pub use repositories::{MemberRepository, RepoResult};
