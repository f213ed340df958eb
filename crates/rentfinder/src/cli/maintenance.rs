//! Maintenance request CLI commands.

use clap::{Parser, Subcommand};

use rentfinder_core::portfolio::{MaintenancePriority, MaintenanceRequest, MaintenanceStatus};

use super::Context;
use crate::output::{pretty, render};
use crate::services::MaintenanceFilter;
use crate::state::AppState;

/// Maintenance request commands.
#[derive(Debug, Parser)]
pub struct MaintenanceCommand {
    #[command(subcommand)]
    pub action: MaintenanceAction,
}

/// Available maintenance actions.
#[derive(Debug, Subcommand)]
pub enum MaintenanceAction {
    /// List requests, newest first.
    List {
        /// pending, in-progress, completed or cancelled.
        #[arg(long)]
        status: Option<MaintenanceStatus>,
        /// low, medium, high or urgent.
        #[arg(long)]
        priority: Option<MaintenancePriority>,
    },
    /// Open a new request.
    Create {
        /// Property title.
        #[arg(long)]
        property: String,
        /// Tenant name.
        #[arg(long)]
        tenant: String,
        /// Short summary of the issue.
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "medium")]
        priority: MaintenancePriority,
        /// Plumbing, HVAC, Electrical, ...
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Move a request to a new status.
    Status {
        /// Request ID.
        id: String,
        status: MaintenanceStatus,
    },
    /// Number of requests per status.
    Counts,
}

impl MaintenanceCommand {
    pub async fn run(self, state: &AppState, ctx: Context) -> anyhow::Result<Option<String>> {
        let service = &state.maintenance;
        let output = match self.action {
            MaintenanceAction::List { status, priority } => {
                let requests = service.list(MaintenanceFilter { status, priority }).await?;
                render(&requests, ctx.format, |r| pretty::format_requests(r))
            }
            MaintenanceAction::Create {
                property,
                tenant,
                title,
                description,
                priority,
                category,
            } => {
                let request = MaintenanceRequest::new(property, tenant, title, priority)
                    .with_description(description)
                    .with_category(category);
                let created = service.create(request).await?;
                render(&created, ctx.format, |r| {
                    format!("Created:\n{}", pretty::format_request(r))
                })
            }
            MaintenanceAction::Status { id, status } => {
                let updated = service.update_status(&id, status).await?;
                render(&updated, ctx.format, |r| {
                    format!("Updated:\n{}", pretty::format_request(r))
                })
            }
            MaintenanceAction::Counts => {
                let counts = service.counts().await?;
                render(&counts, ctx.format, pretty::format_counts)
            }
        };
        Ok(Some(output))
    }
}
