use serde::Serialize;

use super::{MaintenanceRequest, Property};

/// Monthly income and maintenance spend of one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialRow {
    pub property: String,
    pub rent: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// Per-property rows plus portfolio totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub rows: Vec<FinancialRow>,
    pub total_rent: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
}

/// Builds the income report.
///
/// Maintenance requests reference properties by title, so expenses are the
/// summed `cost` of the requests whose `property` equals the title.
/// Requests without a cost contribute nothing.
pub fn summarize_portfolio(
    properties: &[Property],
    requests: &[MaintenanceRequest],
) -> PortfolioSummary {
    let rows: Vec<FinancialRow> = properties
        .iter()
        .map(|property| {
            let expenses: f64 = requests
                .iter()
                .filter(|r| r.property == property.title)
                .filter_map(|r| r.cost)
                .sum();
            FinancialRow {
                property: property.title.clone(),
                rent: property.rent,
                expenses,
                profit: property.rent - expenses,
            }
        })
        .collect();

    PortfolioSummary {
        total_rent: rows.iter().map(|r| r.rent).sum(),
        total_expenses: rows.iter().map(|r| r.expenses).sum(),
        total_profit: rows.iter().map(|r| r.profit).sum(),
        rows,
    }
}
