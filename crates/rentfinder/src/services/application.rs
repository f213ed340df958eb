use serde_json::json;
use tracing::info;

use rentfinder_core::portfolio::{validate_application, ApplicationStatus, RentalApplication};
use rentfinder_core::record::{Record, APPLICATIONS_TABLE, ID};

use super::{decode, decode_all, today, Result, ServiceError};
use crate::store::Store;

const ENTITY: &str = "RentalApplication";
const APPLIED_DATE: &str = "applied_date";
const PROPERTY_ID: &str = "property_id";

/// Rental applications submitted against the landlord's properties.
#[derive(Debug, Clone)]
pub struct ApplicationService {
    store: Store,
}

impl ApplicationService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Every application, most recently applied first.
    pub async fn list(&self) -> Result<Vec<RentalApplication>> {
        let rows = self
            .store
            .from(APPLICATIONS_TABLE)
            .select("*")
            .order(APPLIED_DATE, false)
            .await;
        decode_all(rows)
    }

    /// Applications for one property, most recently applied first.
    pub async fn list_for_property(&self, property_id: &str) -> Result<Vec<RentalApplication>> {
        let rows = self
            .store
            .from(APPLICATIONS_TABLE)
            .select("*")
            .eq(PROPERTY_ID, property_id)
            .order(APPLIED_DATE, false)
            .await;
        decode_all(rows)
    }

    /// Stores a new application. `applied_date` defaults to today.
    pub async fn submit(&self, mut application: RentalApplication) -> Result<RentalApplication> {
        validate_application(&application)?;

        application.id = None;
        application.created_at = None;
        application.updated_at = None;
        if application.applied_date.is_none() {
            application.applied_date = Some(today(&self.store));
        }

        let record = Record::from_serializable(&application)?;
        let row = self
            .store
            .from(APPLICATIONS_TABLE)
            .insert(vec![record])
            .await
            .select("*")
            .single()
            .await
            .ok_or_else(|| ServiceError::Serialization("insert returned no rows".to_string()))?;

        let submitted: RentalApplication = decode(row)?;
        info!(
            id = ?submitted.id,
            property_id = %submitted.property_id,
            "Application submitted"
        );
        Ok(submitted)
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<RentalApplication> {
        let patch = Record::from_value(json!({ "status": status }))
            .ok_or_else(|| ServiceError::Serialization("status patch".to_string()))?;

        let row = self
            .store
            .from(APPLICATIONS_TABLE)
            .update(patch)
            .eq(ID, id)
            .select("*")
            .single()
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;

        info!(id = %id, status = %status, "Application status updated");
        decode(row)
    }
}
