use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery-address fields checked before an order may be placed, in the
/// order they are reported when missing.
pub const REQUIRED_ADDRESS_FIELDS: [&str; 4] = ["address", "city", "state", "zipCode"];

/// Authenticated customer as supplied by the auth backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, alias = "zipCode")]
    pub zip_code: String,
}

impl Customer {
    /// Names of the required delivery fields that are empty after trimming.
    pub fn missing_address_fields(&self) -> Vec<&'static str> {
        let values = [&self.address, &self.city, &self.state, &self.zip_code];
        REQUIRED_ADDRESS_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn has_complete_address(&self) -> bool {
        self.missing_address_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            id: Uuid::new_v4(),
            email: "jo@example.com".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        }
    }

    #[test]
    fn complete_address_has_no_missing_fields() {
        assert!(customer().has_complete_address());
        assert!(customer().missing_address_fields().is_empty());
    }

    #[test]
    fn blank_zip_code_is_reported_by_wire_name() {
        let mut c = customer();
        c.zip_code = "  ".to_string();
        assert_eq!(c.missing_address_fields(), vec!["zipCode"]);
    }

    #[test]
    fn missing_fields_are_reported_in_declaration_order() {
        let mut c = customer();
        c.city = String::new();
        c.address = String::new();
        assert_eq!(c.missing_address_fields(), vec!["address", "city"]);
    }

    #[test]
    fn deserializes_camel_case_zip_code() {
        let c: Customer = serde_json::from_str(
            r#"{"id":"550e8400-e29b-41d4-a716-446655440000","email":"jo@example.com",
                "address":"1 Main St","city":"Springfield","state":"IL","zipCode":"62701"}"#,
        )
        .expect("valid customer json");
        assert_eq!(c.zip_code, "62701");
    }
}
