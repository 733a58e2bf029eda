//! Ticket and ticket history models.

use serde::{Deserialize, Serialize};

use crate::status::{TicketPriority, TicketStatus};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: DbId,
    pub tenant_id: DbId,
    pub customer_id: DbId,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    /// Technician currently responsible, if any.
    pub assigned_to: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One entry in a ticket's audit trail (`/ticket/{id}/history`).
///
/// Entries written from a multipart update carry an image; its bytes are
/// served separately from `/ticket/history/{id}/image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketHistory {
    pub id: DbId,
    pub ticket_id: DbId,
    pub status: TicketStatus,
    pub note: Option<String>,
    pub image: Option<String>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

impl TicketHistory {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
