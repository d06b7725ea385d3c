//! Privileged user record and role-based permission checks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{ADMIN_PERMISSIONS, ROLE_ADMIN, ROLE_SUPERADMIN, VALID_ROLES};
use crate::error::{DomainError, DomainResult};
use crate::fields::{self, RawFields};
use crate::user::User;

/// Privileged roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Parse a raw role value; only the closed role set is accepted.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_SUPERADMIN => Ok(UserRole::SuperAdmin),
            _ => Err(DomainError::validation(
                "role",
                format!("must be one of: {}", VALID_ROLES.join(", ")),
            )),
        }
    }

    /// Check whether this role grants the named permission.
    ///
    /// Superadmins hold every permission; admins hold the fixed set only.
    pub fn allows(&self, permission: &str) -> bool {
        match self {
            UserRole::SuperAdmin => true,
            UserRole::Admin => ADMIN_PERMISSIONS.contains(&permission),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::SuperAdmin => ROLE_SUPERADMIN,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Privileged user record: a role on top of [`User`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AdminUser {
    #[serde(flatten)]
    user: User,
    role: UserRole,
}

impl AdminUser {
    pub(crate) const KIND: &'static str = "AdminUser";

    /// Fields accepted at construction, in validation order
    pub(crate) const FIELDS: &'static [&'static str] =
        &["email", "first_name", "last_name", "password", "age", "role"];

    /// Build a record from raw named inputs.
    pub fn from_value(input: &Value) -> DomainResult<Self> {
        let fields = fields::as_object(Self::KIND, input)?;
        fields::reject_unknown(Self::KIND, Self::FIELDS, fields)?;
        Self::from_fields(fields)
    }

    pub(crate) fn from_fields(fields: &RawFields) -> DomainResult<Self> {
        let user = User::from_fields(fields)?;
        let role = UserRole::parse(fields::require_str(fields, "role")?)?;
        Ok(Self { user, role })
    }

    pub fn email(&self) -> &str {
        self.user.email()
    }

    pub fn first_name(&self) -> &str {
        self.user.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.user.last_name()
    }

    pub fn password(&self) -> &str {
        self.user.password()
    }

    pub fn age(&self) -> i64 {
        self.user.age()
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn set_email(&mut self, raw: &str) -> DomainResult<()> {
        self.user.set_email(raw)
    }

    pub fn set_first_name(&mut self, raw: &str) -> DomainResult<()> {
        self.user.set_first_name(raw)
    }

    pub fn set_last_name(&mut self, raw: &str) -> DomainResult<()> {
        self.user.set_last_name(raw)
    }

    pub fn set_password(&mut self, raw: &str) -> DomainResult<()> {
        self.user.set_password(raw)
    }

    pub fn set_age(&mut self, value: i64) -> DomainResult<()> {
        self.user.set_age(value)
    }

    /// Replace the role; the old value is kept on failure.
    pub fn set_role(&mut self, raw: &str) -> DomainResult<()> {
        self.role = UserRole::parse(raw)?;
        Ok(())
    }

    /// Check whether this user holds the named permission.
    ///
    /// The argument is raw input and must be a string value; anything else
    /// fails before any permission logic runs. Pure function of the stored
    /// role and the argument.
    pub fn has_permission(&self, permission: &Value) -> DomainResult<bool> {
        let permission = permission
            .as_str()
            .ok_or_else(|| DomainError::validation("permission", "must be a string"))?;
        Ok(self.role.allows(permission))
    }
}
