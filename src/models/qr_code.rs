use serde::{Deserialize, Serialize};

/// A QR code issued by the service, as persisted in the `qr_codes` collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QrRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: QrType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>, // Only set on url-type records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>, // Only set on contact-type records
    pub created_at: i64, // Timestamp in milliseconds
    pub updated_at: i64, // Timestamp in milliseconds
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrType {
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "contact")]
    Contact,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl QrRecord {
    pub fn new_url(id: String, title: Option<String>, target_url: String) -> Self {
        let now = chrono::Utc::now().timestamp_millis();

        Self {
            id,
            title,
            kind: QrType::Url,
            target_url: Some(target_url),
            contact: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn new_contact(id: String, title: String, contact: Contact) -> Self {
        let now = chrono::Utc::now().timestamp_millis();

        Self {
            id,
            title: Some(title),
            kind: QrType::Contact,
            target_url: None,
            contact: Some(contact),
            created_at: now,
            updated_at: now,
        }
    }

    /// Destination of a redirect-type QR. Contact records never redirect.
    pub fn redirect_target(&self) -> Option<&str> {
        match self.kind {
            QrType::Url => self.target_url.as_deref(),
            QrType::Contact => None,
        }
    }
}
