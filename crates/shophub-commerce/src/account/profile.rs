//! Customer profile types.

use serde::{Deserialize, Serialize};

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// The signed-in customer's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Customer identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Default shipping address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Unix timestamp of account creation.
    pub joined_at: i64,
}

impl Profile {
    /// Create a minimal profile, stamped with the current time.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
            phone: None,
            address: None,
            joined_at: current_timestamp(),
        }
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_profile() {
        let profile = Profile::new("1", "Jane Doe", "jane@example.com");
        assert_eq!(profile.name, "Jane Doe");
        assert!(profile.address.is_none());
        assert!(profile.joined_at > 0);
    }

    #[test]
    fn serde_camel_case() {
        let mut profile = Profile::new("1", "Jane Doe", "jane@example.com");
        profile.address = Some(Address {
            street: "123 Main Street".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            country: "United States".to_string(),
        });

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["joinedAt"], serde_json::json!(profile.joined_at));
        assert_eq!(json["address"]["zipCode"], serde_json::json!("10001"));
    }
}
