//! Service context - dependency container for services
//!
//! Holds the member repository, the password encoder, and the password policy.

use std::sync::Arc;

use notice_common::PasswordPolicy;
use notice_core::traits::{MemberRepository, PasswordEncoder};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    member_repo: Arc<dyn MemberRepository>,
    password_encoder: Arc<dyn PasswordEncoder>,
    password_policy: PasswordPolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        password_encoder: Arc<dyn PasswordEncoder>,
        password_policy: PasswordPolicy,
    ) -> Self {
        Self {
            member_repo,
            password_encoder,
            password_policy,
        }
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the password encoder
    pub fn password_encoder(&self) -> &dyn PasswordEncoder {
        self.password_encoder.as_ref()
    }

    /// Get the password policy
    pub fn password_policy(&self) -> &PasswordPolicy {
        &self.password_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("member_repo", &"MemberRepository")
            .field("password_encoder", &"PasswordEncoder")
            .field("password_policy", &self.password_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    password_encoder: Option<Arc<dyn PasswordEncoder>>,
    password_policy: Option<PasswordPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn password_encoder(mut self, encoder: Arc<dyn PasswordEncoder>) -> Self {
        self.password_encoder = Some(encoder);
        self
    }

    pub fn password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password_policy = Some(policy);
        self
    }

    /// Build the ServiceContext. The password policy falls back to its default.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the repository or encoder is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.password_encoder
                .ok_or_else(|| ServiceError::validation("password_encoder is required"))?,
            self.password_policy.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notice_common::Argon2PasswordEncoder;

    #[test]
    fn test_build_requires_repository() {
        let err = ServiceContextBuilder::new()
            .password_encoder(Arc::new(Argon2PasswordEncoder::new()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("member_repo is required"));
    }
}
