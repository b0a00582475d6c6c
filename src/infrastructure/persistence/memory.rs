//! In-memory carrier directory
//!
//! Holds seeded rows in insertion order and answers lookups with the same
//! contract as the PostgreSQL directory: first matching row, or `None`.

use crate::domain::carrier::{
    CarrierCredential, CarrierDirectory, E164Mapping, NumberMapping, SipUriMapping,
};
use crate::domain::shared::result::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryCarrierDirectory {
    carriers: Arc<RwLock<Vec<(String, CarrierCredential)>>>,
    mappings: Arc<RwLock<Vec<NumberMapping>>>,
}

impl InMemoryCarrierDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `carrier_credentials` row. Duplicate names are kept; lookups see the first.
    pub async fn insert_carrier(
        &self,
        carrier_name: impl Into<String>,
        credential: CarrierCredential,
    ) {
        let mut carriers = self.carriers.write().await;
        carriers.push((carrier_name.into(), credential));
    }

    /// Add a `number_mapping` row
    pub async fn insert_mapping(&self, mapping: NumberMapping) {
        let mut mappings = self.mappings.write().await;
        mappings.push(mapping);
    }
}

#[async_trait]
impl CarrierDirectory for InMemoryCarrierDirectory {
    async fn lookup_carrier(&self, carrier_name: &str) -> Result<Option<CarrierCredential>> {
        let carriers = self.carriers.read().await;
        Ok(carriers
            .iter()
            .find(|(name, _)| name == carrier_name)
            .map(|(_, credential)| credential.clone()))
    }

    async fn find_sipuri_mapping(&self, sipuri: &str) -> Result<Option<SipUriMapping>> {
        let mappings = self.mappings.read().await;
        Ok(mappings
            .iter()
            .find(|m| m.sipuri == sipuri)
            .map(NumberMapping::sipuri_mapping))
    }

    async fn find_e164_mapping(
        &self,
        e164: &str,
        carrier_name: &str,
    ) -> Result<Option<E164Mapping>> {
        let mappings = self.mappings.read().await;
        Ok(mappings
            .iter()
            .find(|m| m.e164 == e164 && m.carrier_name == carrier_name)
            .map(NumberMapping::e164_mapping))
    }
}
