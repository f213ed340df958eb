use serde::Serialize;

use super::Property;

/// Aggregate figures shown on the portfolio dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PropertyStats {
    pub total_properties: usize,
    pub total_rent: f64,
    pub average_rent: f64,
    /// Estimated at 80% of the portfolio; there is no lease tracking yet.
    pub occupied_properties: usize,
}

impl PropertyStats {
    pub fn from_properties(properties: &[Property]) -> Self {
        let total_properties = properties.len();
        let total_rent: f64 = properties.iter().map(|p| p.rent).sum();
        let average_rent = if total_properties > 0 {
            total_rent / total_properties as f64
        } else {
            0.0
        };

        Self {
            total_properties,
            total_rent,
            average_rent,
            occupied_properties: total_properties * 4 / 5,
        }
    }
}
