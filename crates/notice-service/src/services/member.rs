//! Member service
//!
//! Handles registration, profile lookups and updates, password changes, and withdrawal.

use notice_common::{validate_password_strength, AppError};
use notice_core::{Member, MemberId};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    ChangePasswordRequest, MemberResponse, RegisterMemberRequest, UpdateMemberRequest,
    WithdrawRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new member.
    ///
    /// The password is always encoded and the USER role granted before the
    /// member reaches the store.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterMemberRequest) -> ServiceResult<MemberResponse> {
        request.validate()?;
        validate_password_strength(&request.password, self.ctx.password_policy())?;

        if self
            .ctx
            .member_repo()
            .exists_by_username(&request.username)
            .await?
        {
            return Err(ServiceError::conflict(format!(
                "Username already taken: {}",
                request.username
            )));
        }

        let mut member = Member::builder()
            .username(request.username)
            .password(request.password)
            .name(request.name)
            .nickname(request.nickname)
            .age(request.age)
            .build();
        member.encode_password(self.ctx.password_encoder())?;
        member.grant_user_role();

        let saved = self.ctx.member_repo().save(&member).await?;
        info!(member_id = %saved.id(), "Member registered");

        Ok(MemberResponse::from(&saved))
    }

    /// Get member by ID
    #[instrument(skip(self))]
    pub async fn get_member(&self, member_id: MemberId) -> ServiceResult<MemberResponse> {
        let member = self.load(member_id).await?;
        Ok(MemberResponse::from(&member))
    }

    /// Find member by username
    #[instrument(skip(self))]
    pub async fn get_by_username(&self, username: &str) -> ServiceResult<Option<MemberResponse>> {
        let member = self.ctx.member_repo().find_by_username(username).await?;
        Ok(member.as_ref().map(MemberResponse::from))
    }

    /// Update name, nickname, and/or age
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        member_id: MemberId,
        request: UpdateMemberRequest,
    ) -> ServiceResult<MemberResponse> {
        request.validate()?;

        let mut member = self.load(member_id).await?;
        if request.is_empty() {
            return Ok(MemberResponse::from(&member));
        }

        if let Some(name) = request.name {
            member.update_name(name);
        }
        if let Some(nickname) = request.nickname {
            member.update_nickname(nickname);
        }
        if let Some(age) = request.age {
            member.update_age(age);
        }

        let updated = self.ctx.member_repo().update(&member).await?;
        info!(member_id = %member_id, "Member profile updated");

        Ok(MemberResponse::from(&updated))
    }

    /// Change password after verifying the current one
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        member_id: MemberId,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let mut member = self.load(member_id).await?;
        self.verify_password(&member, &request.current_password)?;
        validate_password_strength(&request.new_password, self.ctx.password_policy())?;

        member.update_password(self.ctx.password_encoder(), &request.new_password)?;
        self.ctx.member_repo().update(&member).await?;
        info!(member_id = %member_id, "Member password changed");

        Ok(())
    }

    /// Delete the member's account after verifying the password
    #[instrument(skip(self, request))]
    pub async fn withdraw(&self, member_id: MemberId, request: WithdrawRequest) -> ServiceResult<()> {
        let member = self.load(member_id).await?;
        self.verify_password(&member, &request.password)?;

        self.ctx.member_repo().delete(&member).await?;
        info!(member_id = %member_id, "Member withdrew");

        Ok(())
    }

    async fn load(&self, member_id: MemberId) -> ServiceResult<Member> {
        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))
    }

    fn verify_password(&self, member: &Member, raw: &str) -> ServiceResult<()> {
        if member.password_matches(self.ctx.password_encoder(), raw) {
            Ok(())
        } else {
            warn!(member_id = %member.id(), "Password verification failed");
            Err(AppError::InvalidCredentials.into())
        }
    }
}
