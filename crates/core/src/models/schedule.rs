//! Technician schedule model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::ScheduleStatus;
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: DbId,
    pub ticket_id: Option<DbId>,
    pub technician_id: DbId,
    pub title: String,
    pub scheduled_date: NaiveDate,
    pub status: ScheduleStatus,
    pub notes: Option<String>,
}
