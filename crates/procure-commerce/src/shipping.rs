//! Ship-to (delivery address) types.

use serde::{Deserialize, Serialize};

use crate::ids::ShipToId;

/// A stored delivery address selectable at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShipTo {
    pub id: ShipToId,
    pub label: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ShipTo {
    /// "label - address", as shown in pickers.
    pub fn one_line(&self) -> String {
        format!("{} - {}", self.label, self.address)
    }
}

/// Body for registering a new ship-to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewShipTo {
    pub label: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Partial update of a ship-to; absent fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShipToUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ShipToUpdate {
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.address.is_none() && self.phone.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_is_optional() {
        let ship_to: ShipTo =
            serde_json::from_str(r#"{"id": "st-1", "label": "Main", "address": "1-2-3 Chiyoda"}"#)
                .unwrap();
        assert!(ship_to.phone.is_none());
        assert_eq!(ship_to.one_line(), "Main - 1-2-3 Chiyoda");
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = ShipToUpdate {
            phone: Some("03-0000-0000".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"phone":"03-0000-0000"}"#
        );
        assert!(!update.is_empty());
        assert!(ShipToUpdate::default().is_empty());
    }
}
