//! Startup-investment statistics records.
//!
//! The AI endpoint answers with Portuguese field names and loose typing
//! (years as strings, counts as floats, values in millions of BRL). The
//! types here split that into raw AI-facing rows and the outward records
//! the frontend contract names, with the reshaping rules between them.

mod records;
mod reshape;
mod states;

pub use records::{
    DashboardData, DashboardPayload, IndustryGrowth, RawIndustryRow, RawReport, RawStartupRow,
    RawStateRow, Report, StartupYearCount, StateInvestment, StateInvestmentTotal, YearCount,
    YearGrowth,
};
pub use reshape::{aggregate_state_investment, investment_map_to_rows};
pub use states::normalize_name;
