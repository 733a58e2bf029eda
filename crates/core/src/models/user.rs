//! User account model.

use serde::{Deserialize, Serialize};

use crate::status::UserRole;
use crate::types::{DbId, Timestamp};

/// Account record as returned by `/user`. Never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    /// `None` for platform-wide accounts (super admins).
    pub tenant_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
