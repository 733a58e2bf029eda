//! Subcommand dispatch.

use std::path::PathBuf;

use anyhow::Context;
use serde_json::{json, Value};

use fieldops_client::ApiClient;
use fieldops_core::query::{CustomerQuery, ScheduleQuery, TenantQuery, TicketQuery, UserQuery};
use fieldops_core::status_badge::badge_for_str;

use crate::cli::Command;

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Json(Value),
    /// Binary body written to disk.
    Saved { path: PathBuf, bytes: usize },
}

impl Output {
    pub fn render(&self) -> anyhow::Result<String> {
        match self {
            Self::Json(value) => Ok(serde_json::to_string_pretty(value)?),
            Self::Saved { path, bytes } => Ok(format!("Wrote {bytes} bytes to {}", path.display())),
        }
    }
}

/// Run one command. Only `badge` stays off the network.
pub async fn run(client: &ApiClient, command: &Command) -> anyhow::Result<Output> {
    let value = match command {
        Command::Tenants(args) => to_json(client.tenants().list(&TenantQuery::from(args)).await?)?,
        Command::Tenant { id } => to_json(client.tenants().get(*id).await?)?,
        Command::TenantLogo { id, out } => {
            let logo = client.tenants().logo(*id).await?;
            tokio::fs::write(out, &logo.bytes)
                .await
                .with_context(|| format!("failed to write {}", out.display()))?;
            tracing::info!(tenant_id = *id, content_type = ?logo.content_type, "Saved tenant logo");
            return Ok(Output::Saved {
                path: out.clone(),
                bytes: logo.bytes.len(),
            });
        }
        Command::Customers(args) => {
            to_json(client.customers().list(&CustomerQuery::from(args)).await?)?
        }
        Command::Tickets(args) => to_json(client.tickets().list(&TicketQuery::from(args)).await?)?,
        Command::Ticket { id, history: true } => to_json(client.tickets().history(*id).await?)?,
        Command::Ticket { id, history: false } => to_json(client.tickets().get(*id).await?)?,
        Command::Schedules(args) => {
            to_json(client.schedules().list(&ScheduleQuery::from(args)).await?)?
        }
        Command::Users(args) => to_json(client.users().list(&UserQuery::from(args)).await?)?,
        Command::Badge { status } => badge(status),
    };
    Ok(Output::Json(value))
}

/// Badge text and colour class for a raw status value.
pub fn badge(status: &str) -> Value {
    let badge = badge_for_str(status);
    json!({
        "status": status,
        "text": badge.text,
        "color": badge.color.class(),
    })
}

fn to_json<T: serde::Serialize>(value: T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}
