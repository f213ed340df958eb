//! Tenant messaging CLI commands.

use clap::{Parser, Subcommand};

use rentfinder_core::portfolio::{Message, MessageSender, MessageType};

use super::Context;
use crate::output::{pretty, render};
use crate::state::AppState;

/// Tenant messaging commands.
#[derive(Debug, Parser)]
pub struct MessagesCommand {
    #[command(subcommand)]
    pub action: MessagesAction,
}

/// Available messaging actions.
#[derive(Debug, Subcommand)]
pub enum MessagesAction {
    /// Show the conversation with a tenant, oldest first.
    List {
        /// Tenant name.
        tenant: String,
    },
    /// Send a message in a tenant conversation.
    Send {
        #[arg(long)]
        tenant: String,
        #[arg(long)]
        content: String,
        /// landlord or tenant.
        #[arg(long = "from", default_value = "landlord")]
        sender: MessageSender,
        /// message, maintenance, payment or general.
        #[arg(long = "type", default_value = "message")]
        message_type: MessageType,
    },
    /// Mark one message as read.
    Read {
        /// Message ID.
        id: String,
    },
    /// Mark every tenant message in a conversation as read.
    ReadAll {
        tenant: String,
    },
    /// Number of unread tenant messages.
    Unread {
        tenant: String,
    },
}

impl MessagesCommand {
    pub async fn run(self, state: &AppState, ctx: Context) -> anyhow::Result<Option<String>> {
        let service = &state.messages;
        let output = match self.action {
            MessagesAction::List { tenant } => {
                let messages = service.list_for_tenant(&tenant).await?;
                render(&messages, ctx.format, |m| pretty::format_messages(m))
            }
            MessagesAction::Send {
                tenant,
                content,
                sender,
                message_type,
            } => {
                let message = Message::new(tenant, sender, content).with_type(message_type);
                let sent = service.send(message).await?;
                render(&sent, ctx.format, |m| format!("Sent:\n{}", pretty::format_message(m)))
            }
            MessagesAction::Read { id } => {
                let message = service.mark_read(&id).await?;
                render(&message, ctx.format, pretty::format_message)
            }
            MessagesAction::ReadAll { tenant } => {
                let marked = service.mark_conversation_read(&tenant).await?;
                return Ok(ctx.notice(format!("Marked {} message(s) from {} as read", marked, tenant)));
            }
            MessagesAction::Unread { tenant } => {
                let unread = service.unread_count(&tenant).await?;
                render(&unread, ctx.format, |n| format!("{} unread from {}", n, tenant))
            }
        };
        Ok(Some(output))
    }
}
