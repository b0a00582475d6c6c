//! Carrier credential and number mapping records

use serde::{Deserialize, Serialize};

/// SIP authentication identity registered for an upstream carrier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CarrierCredential {
    pub username: String,
    pub ha1: String, // MD5(username:realm:password), never interpreted here
    pub domain: String,
}

impl CarrierCredential {
    pub fn new(
        username: impl Into<String>,
        ha1: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            ha1: ha1.into(),
            domain: domain.into(),
        }
    }
}

/// A full `number_mapping` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct NumberMapping {
    pub e164: String,
    pub sipuri: String,
    pub carrier_name: String,
}

impl NumberMapping {
    pub fn new(
        e164: impl Into<String>,
        sipuri: impl Into<String>,
        carrier_name: impl Into<String>,
    ) -> Self {
        Self {
            e164: e164.into(),
            sipuri: sipuri.into(),
            carrier_name: carrier_name.into(),
        }
    }

    /// Project onto the columns returned when resolving by SIP URI
    pub fn sipuri_mapping(&self) -> SipUriMapping {
        SipUriMapping {
            e164: self.e164.clone(),
            carrier_name: self.carrier_name.clone(),
        }
    }

    /// Project onto the columns returned when resolving by E.164 number and carrier
    pub fn e164_mapping(&self) -> E164Mapping {
        E164Mapping {
            sipuri: self.sipuri.clone(),
        }
    }
}

/// Result of resolving a SIP URI to the public number behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SipUriMapping {
    pub e164: String,
    #[serde(rename = "carrier")]
    pub carrier_name: String,
}

/// Result of resolving an E.164 number, scoped to a carrier, to a SIP URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct E164Mapping {
    pub sipuri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_projections() {
        let mapping = NumberMapping::new("+15551234567", "sip:1@x", "acme");

        assert_eq!(
            mapping.sipuri_mapping(),
            SipUriMapping {
                e164: "+15551234567".to_string(),
                carrier_name: "acme".to_string(),
            }
        );
        assert_eq!(mapping.e164_mapping().sipuri, "sip:1@x");
    }

    #[test]
    fn test_sipuri_mapping_serializes_carrier_key() {
        let mapping = NumberMapping::new("+15551234567", "sip:1@x", "acme").sipuri_mapping();

        let value = serde_json::to_value(&mapping).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "e164": "+15551234567", "carrier": "acme" })
        );

        let parsed: SipUriMapping = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, mapping);
    }
}
