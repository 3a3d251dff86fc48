//! Data transfer objects for the statistics endpoints.
//!
//! Envelope keys are the frontend contract and keep the camelCase
//! Portuguese names the dashboard components read.

use serde::{Deserialize, Serialize};

use crate::domain::stats::{
    IndustryGrowth, Report, StartupYearCount, StateInvestment, StateInvestmentTotal, YearCount,
    YearGrowth,
};

/// Response of `GET /api/ai/startups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupSeriesResponse {
    #[serde(rename = "startupsPorAno")]
    pub startups_por_ano: Vec<StartupYearCount>,
}

/// Response of `GET /api/ai/industria`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryGrowthResponse {
    #[serde(rename = "crescimentoIndustria")]
    pub crescimento_industria: Vec<IndustryGrowth>,
}

/// Response of `GET /api/ai/investimento`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateInvestmentResponse {
    #[serde(rename = "investimentoPorEstado")]
    pub investimento_por_estado: Vec<StateInvestmentTotal>,
}

/// Response of `GET /api/ai/relatorios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    #[serde(rename = "startupsPorAno")]
    pub startups_por_ano: Vec<YearCount>,
    #[serde(rename = "investimentoPorEstado")]
    pub investimento_por_estado: Vec<StateInvestment>,
    #[serde(rename = "crescimentoIndustria")]
    pub crescimento_industria: Vec<YearGrowth>,
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            startups_por_ano: report.startups_by_year,
            investimento_por_estado: report.investment_by_state,
            crescimento_industria: report.industry_growth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn startup_series_response_uses_contract_envelope() {
        let response = StartupSeriesResponse {
            startups_por_ano: vec![StartupYearCount {
                year: 2020,
                count: 12000,
                status: "histórico".to_string(),
            }],
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            json!({"startupsPorAno": [{"year": 2020, "count": 12000, "status": "histórico"}]})
        );
    }

    #[test]
    fn report_response_converts_from_domain() {
        let report = Report {
            startups_by_year: vec![YearCount {
                year: 2021,
                count: 13374,
            }],
            investment_by_state: vec![StateInvestment {
                state: "SP".to_string(),
                public: 800_000_000.0,
                private: 5_000_000_000.0,
            }],
            industry_growth: vec![YearGrowth {
                year: 2021,
                value_percent: 14.2,
            }],
        };
        let json = serde_json::to_value(ReportResponse::from(report)).unwrap();

        assert_eq!(json["startupsPorAno"][0]["count"], 13374);
        assert_eq!(json["investimentoPorEstado"][0]["public"], 800_000_000.0);
        assert_eq!(json["crescimentoIndustria"][0]["value_percent"], 14.2);
    }
}
