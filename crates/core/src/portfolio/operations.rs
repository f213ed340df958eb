use serde::Serialize;

use super::error::PortfolioError;
use super::types::{MaintenanceRequest, MaintenanceStatus, Property, RentalApplication};

/// Validates a property before it is stored.
pub fn validate_property(property: &Property) -> Result<(), PortfolioError> {
    if property.title.trim().is_empty() {
        return Err(PortfolioError::EmptyTitle);
    }
    if property.address.trim().is_empty() {
        return Err(PortfolioError::EmptyAddress);
    }
    if !property.rent.is_finite() || property.rent < 0.0 {
        return Err(PortfolioError::InvalidRent(property.rent));
    }
    Ok(())
}

/// Validates a rental application before submission.
pub fn validate_application(application: &RentalApplication) -> Result<(), PortfolioError> {
    let email = application.applicant_email.trim();
    let valid_email = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !valid_email {
        return Err(PortfolioError::InvalidEmail(email.to_string()));
    }
    if !(300..=850).contains(&application.credit_score) {
        return Err(PortfolioError::InvalidCreditScore(application.credit_score));
    }
    Ok(())
}

/// Validates a maintenance request before it is created.
pub fn validate_maintenance_request(request: &MaintenanceRequest) -> Result<(), PortfolioError> {
    let required = [&request.property, &request.tenant, &request.title];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(PortfolioError::IncompleteRequest);
    }
    Ok(())
}

/// Number of maintenance requests in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaintenanceCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

pub fn maintenance_counts(requests: &[MaintenanceRequest]) -> MaintenanceCounts {
    requests
        .iter()
        .fold(MaintenanceCounts::default(), |mut counts, request| {
            counts.total += 1;
            match request.status {
                MaintenanceStatus::Pending => counts.pending += 1,
                MaintenanceStatus::InProgress => counts.in_progress += 1,
                MaintenanceStatus::Completed => counts.completed += 1,
                MaintenanceStatus::Cancelled => counts.cancelled += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::MaintenancePriority;

    fn application(email: &str, credit_score: u32) -> RentalApplication {
        RentalApplication {
            property_id: "p1".to_string(),
            applicant_name: "Dana".to_string(),
            applicant_email: email.to_string(),
            credit_score,
            ..RentalApplication::default()
        }
    }

    #[test]
    fn test_validate_property_accepts_complete_property() {
        let property = Property::new("Loft", "1 Main St", 1800.0);
        assert!(validate_property(&property).is_ok());
    }

    #[test]
    fn test_validate_property_rejects_blank_title() {
        let property = Property::new("   ", "1 Main St", 1800.0);
        assert_eq!(validate_property(&property), Err(PortfolioError::EmptyTitle));
    }

    #[test]
    fn test_validate_property_rejects_blank_address() {
        let property = Property::new("Loft", "", 1800.0);
        assert_eq!(
            validate_property(&property),
            Err(PortfolioError::EmptyAddress)
        );
    }

    #[test]
    fn test_validate_property_rejects_negative_rent() {
        let property = Property::new("Loft", "1 Main St", -1.0);
        assert_eq!(
            validate_property(&property),
            Err(PortfolioError::InvalidRent(-1.0))
        );
    }

    #[test]
    fn test_validate_application() {
        assert!(validate_application(&application("dana@example.com", 720)).is_ok());
        assert!(matches!(
            validate_application(&application("dana-at-example", 720)),
            Err(PortfolioError::InvalidEmail(_))
        ));
        assert_eq!(
            validate_application(&application("dana@example.com", 900)),
            Err(PortfolioError::InvalidCreditScore(900))
        );
    }

    #[test]
    fn test_validate_maintenance_request_requires_fields() {
        let complete =
            MaintenanceRequest::new("Luxury Condo", "Sarah", "AC broken", MaintenancePriority::High);
        let missing_tenant =
            MaintenanceRequest::new("Luxury Condo", "", "AC broken", MaintenancePriority::High);

        assert!(validate_maintenance_request(&complete).is_ok());
        assert_eq!(
            validate_maintenance_request(&missing_tenant),
            Err(PortfolioError::IncompleteRequest)
        );
    }

    #[test]
    fn test_maintenance_counts() {
        let mut requests = vec![
            MaintenanceRequest::new("A", "T", "Leak", MaintenancePriority::Medium),
            MaintenanceRequest::new("B", "T", "AC", MaintenancePriority::High),
            MaintenanceRequest::new("C", "T", "Lock", MaintenancePriority::Low),
        ];
        requests[0].status = MaintenanceStatus::InProgress;
        requests[2].status = MaintenanceStatus::Completed;

        let counts = maintenance_counts(&requests);

        assert_eq!(
            counts,
            MaintenanceCounts {
                total: 3,
                pending: 1,
                in_progress: 1,
                completed: 1,
                cancelled: 0,
            }
        );
    }
}
