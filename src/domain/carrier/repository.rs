//! Carrier directory interface

use super::entity::{CarrierCredential, E164Mapping, SipUriMapping};
use crate::domain::shared::result::Result;
use async_trait::async_trait;

/// Read-only lookups used by the SIP control plane to authenticate against
/// carriers and to translate between SIP URIs and E.164 numbers.
///
/// Every lookup issues a single query and returns the first matching row.
/// `Ok(None)` means the query ran and nothing matched.
#[async_trait]
pub trait CarrierDirectory: Send + Sync {
    /// Find the SIP credentials registered for a carrier
    async fn lookup_carrier(&self, carrier_name: &str) -> Result<Option<CarrierCredential>>;

    /// Find the E.164 number and owning carrier behind a SIP URI
    async fn find_sipuri_mapping(&self, sipuri: &str) -> Result<Option<SipUriMapping>>;

    /// Find the SIP URI for an E.164 number on a given carrier
    async fn find_e164_mapping(
        &self,
        e164: &str,
        carrier_name: &str,
    ) -> Result<Option<E164Mapping>>;
}
