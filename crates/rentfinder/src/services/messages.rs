use serde_json::json;
use tracing::info;

use rentfinder_core::portfolio::{unread_count, validate_message, Message, MessageSender};
use rentfinder_core::record::{format_timestamp, Record, ID, MESSAGES_TABLE};

use super::{decode, decode_all, Result, ServiceError};
use crate::store::Store;

const ENTITY: &str = "Message";
const TIMESTAMP: &str = "timestamp";

/// Landlord/tenant conversations, stored in the `messages` table.
#[derive(Debug, Clone)]
pub struct MessageService {
    store: Store,
}

impl MessageService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Stores a message stamped with the current time. Messages the
    /// landlord sends start out read; tenant messages start unread.
    pub async fn send(&self, mut message: Message) -> Result<Message> {
        validate_message(&message)?;

        message.id = None;
        message.created_at = None;
        message.updated_at = None;
        message.timestamp = Some(format_timestamp(self.store.now()));
        message.read = message.sender == MessageSender::Landlord;

        let record = Record::from_serializable(&message)?;
        let row = self
            .store
            .from(MESSAGES_TABLE)
            .insert(vec![record])
            .await
            .select("*")
            .single()
            .await
            .ok_or_else(|| ServiceError::Serialization("insert returned no rows".to_string()))?;

        let sent: Message = decode(row)?;
        info!(id = ?sent.id, tenant = %sent.tenant, sender = %sent.sender, "Message sent");
        Ok(sent)
    }

    /// The conversation with `tenant`, oldest first.
    pub async fn list_for_tenant(&self, tenant: &str) -> Result<Vec<Message>> {
        let rows = self
            .store
            .from(MESSAGES_TABLE)
            .select("*")
            .eq("tenant", tenant)
            .order(TIMESTAMP, true)
            .await;
        decode_all(rows)
    }

    pub async fn mark_read(&self, id: &str) -> Result<Message> {
        let patch = Record::from_value(json!({ "read": true }))
            .ok_or_else(|| ServiceError::Serialization("read patch".to_string()))?;

        let row = self
            .store
            .from(MESSAGES_TABLE)
            .update(patch)
            .eq(ID, id)
            .single()
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        decode(row)
    }

    /// Marks every unread tenant message of the conversation as read and
    /// returns how many there were.
    pub async fn mark_conversation_read(&self, tenant: &str) -> Result<usize> {
        let unread = self.unread_count(tenant).await?;
        if unread == 0 {
            return Ok(0);
        }
        let patch = Record::from_value(json!({ "read": true }))
            .ok_or_else(|| ServiceError::Serialization("read patch".to_string()))?;

        self.store
            .from(MESSAGES_TABLE)
            .update(patch)
            .eq("tenant", tenant)
            .eq("sender", MessageSender::Tenant.as_str())
            .eq("read", false)
            .single()
            .await;
        info!(tenant = %tenant, count = unread, "Conversation marked read");
        Ok(unread)
    }

    /// Tenant messages in the conversation the landlord has not read.
    pub async fn unread_count(&self, tenant: &str) -> Result<usize> {
        Ok(unread_count(&self.list_for_tenant(tenant).await?))
    }
}
