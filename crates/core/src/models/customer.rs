//! Customer and service connection models.

use serde::{Deserialize, Serialize};

use crate::status::ServiceStatus;
use crate::types::{DbId, Timestamp};

/// A subscriber, with every service connection they hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: DbId,
    pub tenant_id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    /// National identity number (NIK).
    pub nik: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub service_connections: Vec<ServiceConnection>,
}

impl Customer {
    /// Connections currently in the `ACTIVE` state.
    pub fn active_connections(&self) -> impl Iterator<Item = &ServiceConnection> {
        self.service_connections
            .iter()
            .filter(|c| c.status == ServiceStatus::Active)
    }
}

/// One installed package at a customer's premises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConnection {
    pub id: DbId,
    pub customer_id: DbId,
    pub package_name: String,
    pub status: ServiceStatus,
    pub installed_at: Option<Timestamp>,
}
