//! User record kinds with validated fields.
//!
//! Record kinds form a widening chain: [`BaseUser`] holds the identity
//! fields, [`User`] embeds it and adds credentials and age. Fields are
//! private; reads go through accessors and writes through setters that
//! re-run the field's validation rule, so an instance can never hold an
//! invalid value.

use serde::Serialize;
use serde_json::Value;

use crate::error::DomainResult;
use crate::fields::{self, RawFields};

/// Minimal user record: email plus a capitalized name pair.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BaseUser {
    email: String,
    first_name: String,
    last_name: String,
}

impl BaseUser {
    pub(crate) const KIND: &'static str = "BaseUser";

    /// Fields accepted at construction, in validation order
    pub(crate) const FIELDS: &'static [&'static str] = &["email", "first_name", "last_name"];

    /// Build a record from raw named inputs.
    ///
    /// Undeclared fields are rejected before any value is validated;
    /// declared fields are then validated in declaration order and the
    /// first failure is returned.
    pub fn from_value(input: &Value) -> DomainResult<Self> {
        let fields = fields::as_object(Self::KIND, input)?;
        fields::reject_unknown(Self::KIND, Self::FIELDS, fields)?;
        Self::from_fields(fields)
    }

    /// Validate declared fields only; unknown keys are the caller's concern.
    pub(crate) fn from_fields(fields: &RawFields) -> DomainResult<Self> {
        let email = fields::email(fields::require_str(fields, "email")?)?;
        let first_name = fields::name("first_name", fields::require_str(fields, "first_name")?)?;
        let last_name = fields::name("last_name", fields::require_str(fields, "last_name")?)?;
        Ok(Self {
            email,
            first_name,
            last_name,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Replace the email address; the old value is kept on failure.
    pub fn set_email(&mut self, raw: &str) -> DomainResult<()> {
        self.email = fields::email(raw)?;
        Ok(())
    }

    /// Replace the first name; the old value is kept on failure.
    pub fn set_first_name(&mut self, raw: &str) -> DomainResult<()> {
        self.first_name = fields::name("first_name", raw)?;
        Ok(())
    }

    /// Replace the last name; the old value is kept on failure.
    pub fn set_last_name(&mut self, raw: &str) -> DomainResult<()> {
        self.last_name = fields::name("last_name", raw)?;
        Ok(())
    }
}

/// Account record: password and age on top of [`BaseUser`].
///
/// The password is stored verbatim and compared literally; it is never
/// serialized.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    #[serde(flatten)]
    base: BaseUser,
    #[serde(skip_serializing)]
    password: String,
    age: i64,
}

impl User {
    pub(crate) const KIND: &'static str = "User";

    /// Fields accepted at construction, in validation order
    pub(crate) const FIELDS: &'static [&'static str] =
        &["email", "first_name", "last_name", "password", "age"];

    /// Build a record from raw named inputs.
    pub fn from_value(input: &Value) -> DomainResult<Self> {
        let fields = fields::as_object(Self::KIND, input)?;
        fields::reject_unknown(Self::KIND, Self::FIELDS, fields)?;
        Self::from_fields(fields)
    }

    pub(crate) fn from_fields(fields: &RawFields) -> DomainResult<Self> {
        let base = BaseUser::from_fields(fields)?;
        let password = fields::password(fields::require_str(fields, "password")?)?;
        let age = fields::age(fields::require_int(fields, "age")?)?;
        Ok(Self {
            base,
            password,
            age,
        })
    }

    pub fn email(&self) -> &str {
        self.base.email()
    }

    pub fn first_name(&self) -> &str {
        self.base.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.base.last_name()
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn set_email(&mut self, raw: &str) -> DomainResult<()> {
        self.base.set_email(raw)
    }

    pub fn set_first_name(&mut self, raw: &str) -> DomainResult<()> {
        self.base.set_first_name(raw)
    }

    pub fn set_last_name(&mut self, raw: &str) -> DomainResult<()> {
        self.base.set_last_name(raw)
    }

    /// Replace the password; the old value is kept on failure.
    pub fn set_password(&mut self, raw: &str) -> DomainResult<()> {
        self.password = fields::password(raw)?;
        Ok(())
    }

    /// Replace the age; the old value is kept on failure.
    pub fn set_age(&mut self, value: i64) -> DomainResult<()> {
        self.age = fields::age(value)?;
        Ok(())
    }
}
