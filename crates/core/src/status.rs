//! Status and role enumerations shared by the resource records.
//!
//! Wire strings are the upper-case values the backend stores. Service
//! connection status is open-ended (the backend adds states without notice),
//! so it keeps unrecognised values instead of rejecting them.

use serde::{Deserialize, Serialize};

use crate::wire::wire_enum;

// ---------------------------------------------------------------------------
// Service connection status
// ---------------------------------------------------------------------------

/// Wire value for an active service connection.
pub const SERVICE_ACTIVE: &str = "ACTIVE";

/// Wire value for an inactive service connection.
pub const SERVICE_INACTIVE: &str = "INACTIVE";

/// Status of a customer's service connection.
///
/// Only drives presentation. Any value other than `ACTIVE` / `INACTIVE` is
/// preserved verbatim in [`ServiceStatus::Other`] and serialised back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceStatus {
    Active,
    Inactive,
    Other(String),
}

impl ServiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => SERVICE_ACTIVE,
            Self::Inactive => SERVICE_INACTIVE,
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ServiceStatus {
    fn from(value: &str) -> Self {
        match value {
            SERVICE_ACTIVE => Self::Active,
            SERVICE_INACTIVE => Self::Inactive,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ServiceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            SERVICE_ACTIVE => Self::Active,
            SERVICE_INACTIVE => Self::Inactive,
            _ => Self::Other(value),
        }
    }
}

impl From<ServiceStatus> for String {
    fn from(value: ServiceStatus) -> Self {
        match value {
            ServiceStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Closed enumerations
// ---------------------------------------------------------------------------

wire_enum! {
    /// Ticket lifecycle status.
    TicketStatus {
        Open => "OPEN",
        InProgress => "IN_PROGRESS",
        Resolved => "RESOLVED",
        Closed => "CLOSED",
    }
}

wire_enum! {
    /// Ticket urgency.
    TicketPriority {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
        Urgent => "URGENT",
    }
}

wire_enum! {
    /// Technician visit status.
    ScheduleStatus {
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

wire_enum! {
    /// Account role, also used as a list filter on `/user`.
    UserRole {
        SuperAdmin => "SUPER_ADMIN",
        Admin => "ADMIN",
        Technician => "TECHNICIAN",
        CustomerService => "CUSTOMER_SERVICE",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_status_known_values() {
        assert_eq!(ServiceStatus::from("ACTIVE"), ServiceStatus::Active);
        assert_eq!(ServiceStatus::from("INACTIVE"), ServiceStatus::Inactive);
    }

    #[test]
    fn service_status_keeps_unknown_values() {
        let status = ServiceStatus::from("SUSPENDED");
        assert_eq!(status, ServiceStatus::Other("SUSPENDED".to_string()));
        assert_eq!(status.as_str(), "SUSPENDED");
    }

    #[test]
    fn service_status_is_case_sensitive() {
        assert_eq!(
            ServiceStatus::from("active"),
            ServiceStatus::Other("active".to_string())
        );
    }

    #[test]
    fn service_status_serde_uses_wire_string() {
        let json = serde_json::to_string(&ServiceStatus::Inactive).unwrap();
        assert_eq!(json, "\"INACTIVE\"");

        let parsed: ServiceStatus = serde_json::from_str("\"ISOLATED\"").unwrap();
        assert_eq!(parsed, ServiceStatus::Other("ISOLATED".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"ISOLATED\"");
    }

    #[test]
    fn wire_enum_parse_and_display_agree() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::parse(role.as_str()).unwrap(), *role);
            assert_eq!(role.to_string(), role.as_str());
        }
        for status in TicketStatus::ALL {
            assert_eq!(TicketStatus::parse(status.as_str()).unwrap(), *status);
        }
    }

    #[test]
    fn wire_enum_rejects_unknown_value() {
        let err = ScheduleStatus::parse("DONE").unwrap_err();
        assert!(err.to_string().contains("ScheduleStatus"));
        assert!(err.to_string().contains("DONE"));
    }

    #[test]
    fn wire_enum_serde_rename() {
        let json = serde_json::to_string(&TicketPriority::Urgent).unwrap();
        assert_eq!(json, "\"URGENT\"");
        let parsed: TicketStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(parsed, TicketStatus::InProgress);
    }
}
