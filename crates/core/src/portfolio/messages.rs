use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PortfolioError;

/// Side of a landlord/tenant conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    #[default]
    Landlord,
    Tenant,
}

impl MessageSender {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageSender::Landlord => "landlord",
            MessageSender::Tenant => "tenant",
        }
    }
}

impl fmt::Display for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageSender {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landlord" => Ok(MessageSender::Landlord),
            "tenant" => Ok(MessageSender::Tenant),
            other => Err(PortfolioError::UnknownSender(other.to_string())),
        }
    }
}

/// Topic tag of a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Message,
    Maintenance,
    Payment,
    General,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Message => "message",
            MessageType::Maintenance => "maintenance",
            MessageType::Payment => "payment",
            MessageType::General => "general",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(MessageType::Message),
            "maintenance" => Ok(MessageType::Maintenance),
            "payment" => Ok(MessageType::Payment),
            "general" => Ok(MessageType::General),
            other => Err(PortfolioError::UnknownMessageType(other.to_string())),
        }
    }
}

/// One message in the conversation with a tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Tenant the conversation belongs to.
    pub tenant: String,
    pub sender: MessageSender,
    pub content: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Message {
    pub fn new(
        tenant: impl Into<String>,
        sender: MessageSender,
        content: impl Into<String>,
    ) -> Self {
        Self {
            tenant: tenant.into(),
            sender,
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }
}

pub fn validate_message(message: &Message) -> Result<(), PortfolioError> {
    if message.tenant.trim().is_empty() || message.content.trim().is_empty() {
        return Err(PortfolioError::EmptyMessage);
    }
    Ok(())
}

/// Messages from the tenant the landlord has not read yet.
pub fn unread_count(messages: &[Message]) -> usize {
    messages
        .iter()
        .filter(|m| !m.read && m.sender == MessageSender::Tenant)
        .count()
}
