use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PortfolioError;

/// A rental property owned by a landlord.
///
/// Numeric-looking fields such as `bedrooms` and `sqft` are free text, as
/// entered on the listing form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub title: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub rent: f64,
    pub bedrooms: String,
    pub bathrooms: String,
    pub sqft: String,
    pub property_type: String,
    pub description: String,
    /// Comma separated, e.g. `"Parking, Laundry"`.
    pub amenities: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_deposit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Property {
    /// Creates a property with the required listing fields.
    pub fn new(title: impl Into<String>, address: impl Into<String>, rent: f64) -> Self {
        Self {
            title: title.into(),
            address: address.into(),
            rent,
            ..Self::default()
        }
    }

    pub fn with_location(
        mut self,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        self.city = city.into();
        self.state = state.into();
        self.zip_code = zip_code.into();
        self
    }

    pub fn with_layout(
        mut self,
        bedrooms: impl Into<String>,
        bathrooms: impl Into<String>,
        sqft: impl Into<String>,
    ) -> Self {
        self.bedrooms = bedrooms.into();
        self.bathrooms = bathrooms.into();
        self.sqft = sqft.into();
        self
    }

    pub fn with_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = property_type.into();
        self
    }

    /// Splits the comma separated amenities, skipping empty items.
    pub fn amenity_list(&self) -> Vec<&str> {
        self.amenities
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .collect()
    }
}

/// A partial update to a property. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqft: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_date: Option<String>,
}

impl PropertyPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Review state of a rental application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(PortfolioError::UnknownStatus(other.to_string())),
        }
    }
}

/// An application to rent a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub property_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: String,
    pub income: f64,
    pub credit_score: u32,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Urgency of a maintenance request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenancePriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl MaintenancePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenancePriority::Low => "low",
            MaintenancePriority::Medium => "medium",
            MaintenancePriority::High => "high",
            MaintenancePriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for MaintenancePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenancePriority {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(MaintenancePriority::Low),
            "medium" => Ok(MaintenancePriority::Medium),
            "high" => Ok(MaintenancePriority::High),
            "urgent" => Ok(MaintenancePriority::Urgent),
            other => Err(PortfolioError::UnknownPriority(other.to_string())),
        }
    }
}

/// Progress of a maintenance request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Pending => "pending",
            MaintenanceStatus::InProgress => "in-progress",
            MaintenanceStatus::Completed => "completed",
            MaintenanceStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceStatus {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MaintenanceStatus::Pending),
            "in-progress" => Ok(MaintenanceStatus::InProgress),
            "completed" => Ok(MaintenanceStatus::Completed),
            "cancelled" => Ok(MaintenanceStatus::Cancelled),
            other => Err(PortfolioError::UnknownStatus(other.to_string())),
        }
    }
}

/// A maintenance ticket raised for a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub property: String,
    pub tenant: String,
    pub title: String,
    pub description: String,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub category: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub created_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl MaintenanceRequest {
    pub fn new(
        property: impl Into<String>,
        tenant: impl Into<String>,
        title: impl Into<String>,
        priority: MaintenancePriority,
    ) -> Self {
        Self {
            property: property.into(),
            tenant: tenant.into(),
            title: title.into(),
            priority,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_serializes_without_unset_optionals() {
        let property = Property::new("Loft", "1 Main St", 1800.0);
        let value = serde_json::to_value(&property).unwrap();

        assert!(value.get("id").is_none());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["rent"], json!(1800.0));
    }

    #[test]
    fn test_property_deserializes_sparse_record() {
        let property: Property =
            serde_json::from_value(json!({"id": "p1", "title": "Loft", "rent": 1500})).unwrap();

        assert_eq!(property.id.as_deref(), Some("p1"));
        assert_eq!(property.rent, 1500.0);
        assert_eq!(property.city, "");
    }

    #[test]
    fn test_amenity_list_splits_and_trims() {
        let mut property = Property::new("Loft", "1 Main St", 1800.0);
        property.amenities = "Parking, Laundry,, Gym ".to_string();

        assert_eq!(property.amenity_list(), vec!["Parking", "Laundry", "Gym"]);
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = PropertyPatch {
            rent: Some(1200.0),
            ..PropertyPatch::default()
        };

        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"rent": 1200.0}));
        assert!(!patch.is_empty());
        assert!(PropertyPatch::default().is_empty());
    }

    #[test]
    fn test_maintenance_status_wire_format() {
        assert_eq!(
            serde_json::to_value(MaintenanceStatus::InProgress).unwrap(),
            json!("in-progress")
        );
        assert_eq!(
            "in-progress".parse::<MaintenanceStatus>().unwrap(),
            MaintenanceStatus::InProgress
        );
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!(matches!(
            "archived".parse::<ApplicationStatus>(),
            Err(PortfolioError::UnknownStatus(_))
        ));
        assert!(matches!(
            "critical".parse::<MaintenancePriority>(),
            Err(PortfolioError::UnknownPriority(_))
        ));
    }
}
