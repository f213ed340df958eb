use serde_json::{json, Value};
use tracing::info;

use rentfinder_core::portfolio::{
    maintenance_counts, validate_maintenance_request, MaintenanceCounts, MaintenancePriority,
    MaintenanceRequest, MaintenanceStatus,
};
use rentfinder_core::record::{Record, CREATED_AT, ID, MAINTENANCE_TABLE};

use super::{decode, decode_all, today, Result, ServiceError};
use crate::store::Store;

const ENTITY: &str = "MaintenanceRequest";

/// Optional equality filters for [`MaintenanceService::list`]. `None` means all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaintenanceFilter {
    pub status: Option<MaintenanceStatus>,
    pub priority: Option<MaintenancePriority>,
}

/// Maintenance tickets, stored in the `maintenance_requests` table.
#[derive(Debug, Clone)]
pub struct MaintenanceService {
    store: Store,
}

impl MaintenanceService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Matching requests, newest first.
    pub async fn list(&self, filter: MaintenanceFilter) -> Result<Vec<MaintenanceRequest>> {
        let mut query = self.store.from(MAINTENANCE_TABLE).select("*");
        if let Some(status) = filter.status {
            query = query.eq("status", status.as_str());
        }
        if let Some(priority) = filter.priority {
            query = query.eq("priority", priority.as_str());
        }
        decode_all(query.order(CREATED_AT, false).await)
    }

    /// Opens a request as pending, dated today.
    pub async fn create(&self, mut request: MaintenanceRequest) -> Result<MaintenanceRequest> {
        validate_maintenance_request(&request)?;

        request.id = None;
        request.created_at = None;
        request.updated_at = None;
        request.status = MaintenanceStatus::Pending;
        request.created_date = today(&self.store);
        request.completed_date = None;

        let record = Record::from_serializable(&request)?;
        let row = self
            .store
            .from(MAINTENANCE_TABLE)
            .insert(vec![record])
            .await
            .select("*")
            .single()
            .await
            .ok_or_else(|| ServiceError::Serialization("insert returned no rows".to_string()))?;

        let created: MaintenanceRequest = decode(row)?;
        info!(id = ?created.id, property = %created.property, "Maintenance request created");
        Ok(created)
    }

    /// Moves a request to `status`. Completing stamps `completed_date`
    /// with today; any other status clears it.
    pub async fn update_status(
        &self,
        id: &str,
        status: MaintenanceStatus,
    ) -> Result<MaintenanceRequest> {
        let completed_date = match status {
            MaintenanceStatus::Completed => Value::String(today(&self.store)),
            _ => Value::Null,
        };
        let patch = Record::from_value(json!({
            "status": status.as_str(),
            "completed_date": completed_date,
        }))
        .ok_or_else(|| ServiceError::Serialization("status patch".to_string()))?;

        let row = self
            .store
            .from(MAINTENANCE_TABLE)
            .update(patch)
            .eq(ID, id)
            .single()
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;

        info!(id = %id, status = %status, "Maintenance status updated");
        decode(row)
    }

    pub async fn counts(&self) -> Result<MaintenanceCounts> {
        Ok(maintenance_counts(
            &self.list(MaintenanceFilter::default()).await?,
        ))
    }
}
