//! Business logic services
//!
//! Service layer implementations that validate input and orchestrate
//! repository and password encoder calls.

pub mod context;
pub mod error;
pub mod member;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
