//! Command-line argument types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use fieldops_core::query::{CustomerQuery, ScheduleQuery, TenantQuery, TicketQuery, UserQuery};
use fieldops_core::status::{ScheduleStatus, ServiceStatus, UserRole};
use fieldops_core::types::DbId;

#[derive(Parser, Debug)]
#[command(name = "fieldops")]
#[command(about = "Read-only admin queries against the fieldops backend")]
pub struct Cli {
    /// Override `FIELDOPS_API_URL`
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
    /// List tenants
    Tenants(TenantArgs),
    /// Show one tenant with its statistics
    Tenant { id: DbId },
    /// Download a tenant's logo
    TenantLogo {
        id: DbId,
        /// File to write the image to
        #[arg(long)]
        out: PathBuf,
    },
    /// List customers
    Customers(CustomerArgs),
    /// List tickets
    Tickets(PageArgs),
    /// Show one ticket
    Ticket {
        id: DbId,
        /// Show the status history instead of the ticket
        #[arg(long)]
        history: bool,
    },
    /// List technician schedules
    Schedules(ScheduleArgs),
    /// List user accounts
    Users(UserArgs),
    /// Print the badge for a service status (no network)
    Badge { status: String },
}

/// Paging shared by every list command.
#[derive(Args, Clone, Debug, Default, PartialEq)]
pub struct PageArgs {
    #[arg(long)]
    pub page: Option<u32>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct TenantArgs {
    #[command(flatten)]
    pub page: PageArgs,
    /// Only active (`true`) or inactive (`false`) tenants
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct CustomerArgs {
    #[command(flatten)]
    pub page: PageArgs,
    /// Service status wire value, e.g. ACTIVE
    #[arg(long)]
    pub status: Option<ServiceStatus>,
    #[arg(long)]
    pub package: Option<String>,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct ScheduleArgs {
    /// Month, 1-12
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long, value_parser = ScheduleStatus::parse)]
    pub status: Option<ScheduleStatus>,
    #[arg(long)]
    pub technician: Option<DbId>,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct UserArgs {
    #[command(flatten)]
    pub page: PageArgs,
    #[arg(long, value_parser = UserRole::parse)]
    pub role: Option<UserRole>,
}

// ---------------------------------------------------------------------------
// Conversions into query types
// ---------------------------------------------------------------------------

impl From<&TenantArgs> for TenantQuery {
    fn from(args: &TenantArgs) -> Self {
        Self {
            page: args.page.page,
            limit: args.page.limit,
            search: args.page.search.clone(),
            is_active: args.active,
        }
    }
}

impl From<&CustomerArgs> for CustomerQuery {
    fn from(args: &CustomerArgs) -> Self {
        Self {
            page: args.page.page,
            limit: args.page.limit,
            search: args.page.search.clone(),
            status: args.status.clone(),
            package_name: args.package.clone(),
        }
    }
}

impl From<&PageArgs> for TicketQuery {
    fn from(args: &PageArgs) -> Self {
        Self {
            page: args.page,
            limit: args.limit,
            search: args.search.clone(),
        }
    }
}

impl From<&ScheduleArgs> for ScheduleQuery {
    fn from(args: &ScheduleArgs) -> Self {
        Self {
            month: args.month,
            year: args.year,
            status: args.status,
            technician_id: args.technician,
        }
    }
}

impl From<&UserArgs> for UserQuery {
    fn from(args: &UserArgs) -> Self {
        Self {
            page: args.page.page,
            limit: args.page.limit,
            search: args.page.search.clone(),
            role: args.role,
        }
    }
}
