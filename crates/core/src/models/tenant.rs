//! Tenant entity model.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A tenant (ISP branch / reseller) as returned by `/tenant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    /// Stored logo path; fetch the image itself through `/tenant/{id}/logo`.
    pub logo: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    /// Set when the tenant has been soft-deleted.
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Only present on detail responses.
    pub statistics: Option<TenantStatistics>,
}

impl Tenant {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Aggregate counts attached to a tenant detail response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantStatistics {
    pub total_users: i64,
    pub total_customers: i64,
    pub active_services: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_without_optional_fields() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": 3,
            "name": "Branch Malang",
            "slug": "branch-malang",
            "is_active": true,
            "created_at": "2025-01-10T08:00:00Z",
            "updated_at": "2025-01-10T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(tenant.id, 3);
        assert!(tenant.logo.is_none());
        assert!(tenant.statistics.is_none());
        assert!(!tenant.is_deleted());
    }

    #[test]
    fn deserializes_statistics_and_soft_delete() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": 4,
            "name": "Branch Batu",
            "slug": "branch-batu",
            "logo": "logos/batu.png",
            "is_active": false,
            "deleted_at": "2025-03-01T00:00:00Z",
            "created_at": "2025-01-10T08:00:00Z",
            "updated_at": "2025-03-01T00:00:00Z",
            "statistics": {
                "total_users": 12,
                "total_customers": 340,
                "active_services": 298
            }
        }))
        .unwrap();

        assert!(tenant.is_deleted());
        let stats = tenant.statistics.unwrap();
        assert_eq!(stats.total_customers, 340);
        assert_eq!(stats.active_services, 298);
    }
}
