//! Records mirroring the backend REST resources.

pub mod customer;
pub mod schedule;
pub mod tenant;
pub mod ticket;
pub mod user;

pub use customer::{Customer, ServiceConnection};
pub use schedule::Schedule;
pub use tenant::{Tenant, TenantStatistics};
pub use ticket::{Ticket, TicketHistory};
pub use user::User;
