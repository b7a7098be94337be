//! Data transfer objects for member use cases
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs that never expose the stored password

pub mod requests;
pub mod responses;

pub use requests::{ChangePasswordRequest, RegisterMemberRequest, UpdateMemberRequest, WithdrawRequest};
pub use responses::MemberResponse;
