//! Form payloads and their validation schemas.
//!
//! Each form is the full body the admin UI submits for a create or edit.
//! Edits are full replaces, so update forms carry every editable field.
//! The request layer never validates; callers run [`validate_form`] before
//! submitting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::status::{TicketPriority, TicketStatus, UserRole};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

/// New customer registration, submitted together with the wizard photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerForm {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 15, message = "Phone must be 8-15 characters"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Address must not be empty"))]
    pub address: String,
    #[validate(length(equal = 16, message = "NIK must be exactly 16 digits"))]
    pub nik: String,
    #[validate(length(min = 1, message = "Package must be selected"))]
    pub package_name: String,
    /// Required for super admins; tenant admins are scoped server-side.
    pub tenant_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Ticket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TicketForm {
    #[validate(range(min = 1, message = "Customer must be selected"))]
    pub customer_id: DbId,
    #[validate(length(min = 3, max = 120, message = "Title must be 3-120 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
    pub priority: TicketPriority,
}

/// Full replacement of a ticket. `note` is recorded in the ticket history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TicketUpdateForm {
    #[validate(length(min = 3, max = 120, message = "Title must be 3-120 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub assigned_to: Option<DbId>,
    pub note: Option<String>,
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ScheduleForm {
    #[validate(range(min = 1, message = "Technician must be selected"))]
    pub technician_id: DbId,
    pub ticket_id: Option<DbId>,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub scheduled_date: NaiveDate,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Tenant
// ---------------------------------------------------------------------------

/// Tenant edit. The logo travels beside it as a file part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TenantForm {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub address: Option<String>,
    #[validate(length(min = 8, max = 15, message = "Phone must be 8-15 characters"))]
    pub phone: Option<String>,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// Account creation via `/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterUserForm {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub tenant_id: Option<DbId>,
}

/// Full replacement of an account. The avatar travels beside it as a file part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserUpdateForm {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Run a form's schema and flatten failures into [`CoreError::Validation`].
///
/// The message lists every failing field as `field: message`, sorted by
/// field name so it is stable across runs.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), CoreError> {
    form.validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), |m| m.to_string());
                format!("{field}: {message}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
