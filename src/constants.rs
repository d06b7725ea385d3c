//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role with a fixed permission set
pub const ROLE_ADMIN: &str = "admin";

/// Superadministrator role holding every permission
pub const ROLE_SUPERADMIN: &str = "superadmin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_SUPERADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Permissions
// =============================================================================

/// Permissions granted to the `admin` role
pub const ADMIN_PERMISSIONS: &[&str] = &["read", "write", "delete"];

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters a password must contain at least one of
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

/// Minimum accepted age
pub const MIN_AGE: i64 = 18;
