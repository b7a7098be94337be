//! Member entity - a registered account of the notice board

use std::fmt;

use chrono::{DateTime, Utc};

use crate::entities::Role;
use crate::error::DomainError;
use crate::traits::PasswordEncoder;
use crate::value_objects::{AuditStamp, MemberId};

/// A persisted member.
///
/// Only the store creates these (from `NewMember` on save, or from a row on
/// lookup), so every required column is present. Mutations happen in place
/// and are written back with `MemberRepository::update`.
#[derive(Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    username: String,
    password: String,
    name: String,
    nickname: String,
    age: i32,
    role: Option<Role>,
    audit: AuditStamp,
}

impl Member {
    /// Start building a member that has not been saved yet
    pub fn builder() -> MemberBuilder {
        MemberBuilder::default()
    }

    /// Rebuild a member from stored values
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: MemberId,
        username: String,
        password: String,
        name: String,
        nickname: String,
        age: i32,
        role: Option<Role>,
        audit: AuditStamp,
    ) -> Self {
        Self {
            id,
            username,
            password,
            name,
            nickname,
            age,
            role,
            audit,
        }
    }

    #[inline]
    pub fn id(&self) -> MemberId {
        self.id
    }

    #[inline]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stored (hashed) password
    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    #[inline]
    pub fn age(&self) -> i32 {
        self.age
    }

    #[inline]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    #[inline]
    pub fn audit(&self) -> AuditStamp {
        self.audit
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.audit.created_at()
    }

    #[inline]
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.audit.modified_at()
    }

    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn update_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    pub fn update_age(&mut self, age: i32) {
        self.age = age;
    }

    /// Hash `raw` with `encoder` and replace the stored password
    pub fn update_password(
        &mut self,
        encoder: &(impl PasswordEncoder + ?Sized),
        raw: &str,
    ) -> Result<(), DomainError> {
        self.password = encoder.encode(raw)?;
        Ok(())
    }

    /// Check a plaintext password against the stored hash
    pub fn password_matches(&self, encoder: &(impl PasswordEncoder + ?Sized), raw: &str) -> bool {
        encoder.matches(raw, &self.password)
    }

    /// Grant the regular user authority
    pub fn grant_user_role(&mut self) {
        self.role = Some(Role::User);
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("name", &self.name)
            .field("nickname", &self.nickname)
            .field("age", &self.age)
            .field("role", &self.role)
            .field("audit", &self.audit)
            .finish()
    }
}

/// A member that has not been saved yet.
///
/// Every field is optional here: required columns are enforced by the
/// database when the member is saved, so a missing value surfaces as a
/// constraint violation at write time.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NewMember {
    username: Option<String>,
    password: Option<String>,
    password_encoded: bool,
    name: Option<String>,
    nickname: Option<String>,
    age: Option<i32>,
    role: Option<Role>,
}

impl NewMember {
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Whether `encode_password` has run on the current password
    pub fn is_password_encoded(&self) -> bool {
        self.password_encoded
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Hash the raw password in place. Runs once; later calls are no-ops.
    pub fn encode_password(
        &mut self,
        encoder: &(impl PasswordEncoder + ?Sized),
    ) -> Result<(), DomainError> {
        if self.password_encoded {
            return Ok(());
        }
        let raw = self
            .password
            .as_deref()
            .ok_or_else(|| DomainError::ValidationError("password is not set".to_string()))?;
        self.password = Some(encoder.encode(raw)?);
        self.password_encoded = true;
        Ok(())
    }

    /// Grant the regular user authority
    pub fn grant_user_role(&mut self) {
        self.role = Some(Role::User);
    }
}

impl fmt::Debug for NewMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewMember")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("password_encoded", &self.password_encoded)
            .field("name", &self.name)
            .field("nickname", &self.nickname)
            .field("age", &self.age)
            .field("role", &self.role)
            .finish()
    }
}

/// Builder for `NewMember`
#[derive(Debug, Default)]
pub struct MemberBuilder {
    inner: NewMember,
}

impl MemberBuilder {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.inner.username = Some(username.into());
        self
    }

    /// Raw password; hash it with `NewMember::encode_password` before saving
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.inner.password = Some(password.into());
        self.inner.password_encoded = false;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.inner.nickname = Some(nickname.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.inner.age = Some(age);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.inner.role = Some(role);
        self
    }

    pub fn build(self) -> NewMember {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reversible encoder so tests can see what was hashed
    struct ReverseEncoder;

    impl PasswordEncoder for ReverseEncoder {
        fn encode(&self, raw: &str) -> Result<String, DomainError> {
            Ok(format!("enc:{}", raw.chars().rev().collect::<String>()))
        }

        fn matches(&self, raw: &str, encoded: &str) -> bool {
            self.encode(raw).is_ok_and(|e| e == encoded)
        }
    }

    fn saved_member() -> Member {
        Member::restore(
            MemberId::new(1),
            "username".to_string(),
            "enc:0987654321".to_string(),
            "Member1".to_string(),
            "NickName1".to_string(),
            22,
            Some(Role::User),
            AuditStamp::on_insert(),
        )
    }

    #[test]
    fn test_builder_leaves_unset_fields_empty() {
        let member = Member::builder()
            .password("1234567890")
            .name("Member1")
            .nickname("NickName1")
            .age(22)
            .build();

        assert_eq!(member.username(), None);
        assert_eq!(member.name(), Some("Member1"));
        assert_eq!(member.age(), Some(22));
        assert_eq!(member.role(), None);
        assert!(!member.is_password_encoded());
    }

    #[test]
    fn test_encode_password_runs_once() {
        let mut member = Member::builder().username("username").password("abc").build();

        member.encode_password(&ReverseEncoder).unwrap();
        assert_eq!(member.password(), Some("enc:cba"));
        assert!(member.is_password_encoded());

        member.encode_password(&ReverseEncoder).unwrap();
        assert_eq!(member.password(), Some("enc:cba"));
    }

    #[test]
    fn test_encode_password_without_password() {
        let mut member = Member::builder().username("username").build();
        let err = member.encode_password(&ReverseEncoder).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_grant_user_role_on_new_member() {
        let mut member = Member::builder().username("username").build();
        member.grant_user_role();
        assert_eq!(member.role(), Some(Role::User));
    }

    #[test]
    fn test_profile_updates() {
        let mut member = saved_member();
        member.update_name("New Name");
        member.update_nickname("New Nick");
        member.update_age(33);

        assert_eq!(member.name(), "New Name");
        assert_eq!(member.nickname(), "New Nick");
        assert_eq!(member.age(), 33);
        assert_eq!(member.username(), "username");
    }

    #[test]
    fn test_update_password_rehashes() {
        let mut member = saved_member();
        member.update_password(&ReverseEncoder, "secret").unwrap();

        assert_eq!(member.password(), "enc:terces");
        assert!(member.password_matches(&ReverseEncoder, "secret"));
        assert!(!member.password_matches(&ReverseEncoder, "1234567890"));
    }

    #[test]
    fn test_grant_user_role_demotes_admin() {
        let mut member = saved_member();
        member.role = Some(Role::Admin);
        assert!(member.is_admin());

        member.grant_user_role();
        assert_eq!(member.role(), Some(Role::User));
    }

    #[test]
    fn test_debug_redacts_password() {
        let member = saved_member();
        let output = format!("{member:?}");
        assert!(output.contains("[redacted]"));
        assert!(!output.contains("0987654321"));

        let new_member = Member::builder().password("plain-secret").build();
        assert!(!format!("{new_member:?}").contains("plain-secret"));
    }
}
