use tracing::info;

use rentfinder_core::portfolio::{
    summarize_portfolio, validate_property, MaintenanceRequest, PortfolioError, PortfolioSummary,
    Property, PropertyPatch, PropertyStats,
};
use rentfinder_core::record::{Record, CREATED_AT, ID, MAINTENANCE_TABLE, PROPERTIES_TABLE};

use super::{decode, decode_all, Result, ServiceError};
use crate::auth::MockAuth;
use crate::store::Store;

const ENTITY: &str = "Property";

/// CRUD over the `properties` table, with ownership stamped from the
/// signed-in user.
#[derive(Debug, Clone)]
pub struct PropertyService {
    store: Store,
    auth: MockAuth,
}

impl PropertyService {
    pub fn new(store: Store, auth: MockAuth) -> Self {
        Self { store, auth }
    }

    /// Every property, newest first.
    pub async fn list(&self) -> Result<Vec<Property>> {
        let rows = self
            .store
            .from(PROPERTIES_TABLE)
            .select("*")
            .order(CREATED_AT, false)
            .await;
        decode_all(rows)
    }

    pub async fn get(&self, id: &str) -> Result<Property> {
        let row = self
            .store
            .from(PROPERTIES_TABLE)
            .select("*")
            .eq(ID, id)
            .single()
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        decode(row)
    }

    /// Stores a new property owned by the signed-in user. Any id or
    /// timestamps on `property` are discarded.
    pub async fn create(&self, mut property: Property) -> Result<Property> {
        validate_property(&property)?;
        let user = self.auth.require_user().await?;

        property.id = None;
        property.created_at = None;
        property.updated_at = None;
        property.user_id = Some(user.id);

        let record = Record::from_serializable(&property)?;
        let row = self
            .store
            .from(PROPERTIES_TABLE)
            .insert(vec![record])
            .await
            .select("*")
            .single()
            .await
            .ok_or_else(|| ServiceError::Serialization("insert returned no rows".to_string()))?;

        let created: Property = decode(row)?;
        info!(id = ?created.id, title = %created.title, "Property created");
        Ok(created)
    }

    /// Applies the `Some` fields of `patch`.
    pub async fn update(&self, id: &str, patch: PropertyPatch) -> Result<Property> {
        validate_patch(&patch)?;
        let record = Record::from_serializable(&patch)?;

        let row = self
            .store
            .from(PROPERTIES_TABLE)
            .update(record)
            .eq(ID, id)
            .select("*")
            .single()
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        decode(row)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let removed = self.store.from(PROPERTIES_TABLE).delete().eq(ID, id).await;
        if removed.is_empty() {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(id = %id, "Property deleted");
        Ok(())
    }

    pub async fn stats(&self) -> Result<PropertyStats> {
        Ok(PropertyStats::from_properties(&self.list().await?))
    }

    /// Rent against maintenance spend, per property and in total.
    pub async fn financial_summary(&self) -> Result<PortfolioSummary> {
        let properties = self.list().await?;
        let requests: Vec<MaintenanceRequest> =
            decode_all(self.store.from(MAINTENANCE_TABLE).select("*").await)?;
        Ok(summarize_portfolio(&properties, &requests))
    }
}

fn validate_patch(patch: &PropertyPatch) -> std::result::Result<(), PortfolioError> {
    if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(PortfolioError::EmptyTitle);
    }
    if patch.address.as_deref().is_some_and(|a| a.trim().is_empty()) {
        return Err(PortfolioError::EmptyAddress);
    }
    if let Some(rent) = patch.rent.filter(|r| !r.is_finite() || *r < 0.0) {
        return Err(PortfolioError::InvalidRent(rent));
    }
    Ok(())
}
