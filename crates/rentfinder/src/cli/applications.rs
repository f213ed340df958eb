//! Rental application CLI commands.

use clap::{Parser, Subcommand};

use rentfinder_core::portfolio::{ApplicationStatus, RentalApplication};

use super::Context;
use crate::output::{pretty, render};
use crate::state::AppState;

/// Rental application commands.
#[derive(Debug, Parser)]
pub struct ApplicationsCommand {
    #[command(subcommand)]
    pub action: ApplicationsAction,
}

/// Available application actions.
#[derive(Debug, Subcommand)]
pub enum ApplicationsAction {
    /// List applications, most recent first.
    List {
        /// Only applications for this property.
        #[arg(long)]
        property_id: Option<String>,
    },
    /// Submit an application for a property.
    Submit {
        /// Property ID.
        #[arg(long)]
        property_id: String,
        /// Applicant full name.
        #[arg(long)]
        name: String,
        /// Applicant email.
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Yearly income.
        #[arg(long, default_value_t = 0.0)]
        income: f64,
        /// Credit score (300-850).
        #[arg(long)]
        credit_score: u32,
    },
    /// Approve, reject or reset an application.
    Status {
        /// Application ID.
        id: String,
        /// pending, approved or rejected.
        status: ApplicationStatus,
    },
}

impl ApplicationsCommand {
    pub async fn run(self, state: &AppState, ctx: Context) -> anyhow::Result<Option<String>> {
        let service = &state.applications;
        let output = match self.action {
            ApplicationsAction::List { property_id } => {
                let applications = match property_id {
                    Some(property_id) => service.list_for_property(&property_id).await?,
                    None => service.list().await?,
                };
                render(&applications, ctx.format, |a| pretty::format_applications(a))
            }
            ApplicationsAction::Submit {
                property_id,
                name,
                email,
                phone,
                income,
                credit_score,
            } => {
                let application = service
                    .submit(RentalApplication {
                        property_id,
                        applicant_name: name,
                        applicant_email: email,
                        applicant_phone: phone,
                        income,
                        credit_score,
                        ..RentalApplication::default()
                    })
                    .await?;
                render(&application, ctx.format, |a| {
                    format!("Submitted:\n{}", pretty::format_application(a))
                })
            }
            ApplicationsAction::Status { id, status } => {
                let application = service.update_status(&id, status).await?;
                render(&application, ctx.format, |a| {
                    format!("Updated:\n{}", pretty::format_application(a))
                })
            }
        };
        Ok(Some(output))
    }
}
