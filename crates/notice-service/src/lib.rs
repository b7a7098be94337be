//! # notice-service
//!
//! Application layer containing member use cases and DTOs.

pub mod dto;
pub mod services;

pub use services::{MemberService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
