//! Data-transfer records for the statistics routes.
//!
//! Raw rows mirror what the AI returns; outward records are what the
//! frontend receives. None of these are persisted.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ═══════════════════════════════════════════════════════════════════════════
// Outward records (frontend contract)
// ═══════════════════════════════════════════════════════════════════════════

/// Number of startups in a given year, tagged histórico/projeção.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupYearCount {
    #[serde(deserialize_with = "year_from_loose")]
    pub year: u16,
    #[serde(deserialize_with = "count_from_loose")]
    pub count: u64,
    pub status: String,
}

/// Percentual growth of the technology industry in a given year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryGrowth {
    #[serde(deserialize_with = "year_from_loose")]
    pub year: u16,
    pub value_percent: f64,
    pub status: String,
}

/// Public/private investment figures for a state.
///
/// AI-facing values are in millions of BRL; the report and dashboard routes
/// convert them to absolute BRL before responding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateInvestment {
    pub state: String,
    pub public: f64,
    pub private: f64,
}

impl StateInvestment {
    /// Scales the millions-of-BRL figures to absolute BRL.
    pub fn in_absolute_brl(self) -> Self {
        Self {
            state: self.state,
            public: self.public * 1_000_000.0,
            private: self.private * 1_000_000.0,
        }
    }
}

/// Single-figure investment total for a state, in millions of BRL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateInvestmentTotal {
    pub state: String,
    pub investment_million_brl: f64,
}

/// Report variant of the year series (no status tag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearCount {
    #[serde(deserialize_with = "year_from_loose")]
    pub year: u16,
    #[serde(deserialize_with = "count_from_loose")]
    pub count: u64,
}

/// Report variant of the industry growth series (no status tag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGrowth {
    #[serde(deserialize_with = "year_from_loose")]
    pub year: u16,
    pub value_percent: f64,
}

/// Combined report series, with the investment figures already scaled to
/// absolute BRL.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub startups_by_year: Vec<YearCount>,
    pub investment_by_state: Vec<StateInvestment>,
    pub industry_growth: Vec<YearGrowth>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Raw AI-facing rows
// ═══════════════════════════════════════════════════════════════════════════

/// Report object as the AI returns it; each missing section defaults to an
/// empty series.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReport {
    #[serde(default, rename = "startupsPorAno")]
    pub startups_por_ano: Vec<YearCount>,
    #[serde(default, rename = "investimentoPorEstado")]
    pub investimento_por_estado: Vec<StateInvestment>,
    #[serde(default, rename = "crescimentoIndustria")]
    pub crescimento_industria: Vec<YearGrowth>,
}

impl RawReport {
    /// Reshapes into the outward report, scaling investment to absolute BRL.
    pub fn into_report(self) -> Report {
        Report {
            startups_by_year: self.startups_por_ano,
            investment_by_state: self
                .investimento_por_estado
                .into_iter()
                .map(StateInvestment::in_absolute_brl)
                .collect(),
            industry_growth: self.crescimento_industria,
        }
    }
}

/// Startup-count row as the AI returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStartupRow {
    pub ano: u16,
    pub startups_por_ano: u64,
    pub data_tipo: String,
}

/// Industry-growth row as the AI returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIndustryRow {
    pub ano: u16,
    pub crescimento_industria: f64,
    pub data_tipo: String,
}

/// A row of the per-state breakdown call; the map may be absent and its
/// values may be non-numeric.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStateRow {
    #[serde(default)]
    pub investimento_por_estado: Option<Map<String, Value>>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Dashboard payload
// ═══════════════════════════════════════════════════════════════════════════

/// The combined dashboard response: analysis text, data series and the
/// comma-separated data-source list. The envelope keys are part of the
/// frontend contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub resposta: String,
    pub dados: DashboardData,
    pub fonte_dados: String,
}

/// Inner data series of the dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub startups_por_ano: Vec<StartupYearCount>,
    pub investimento_por_estado: Vec<StateInvestment>,
    #[serde(default)]
    pub crescimento_industria: Vec<IndustryGrowth>,
}

impl DashboardPayload {
    /// Scales the investment series from millions of BRL to absolute BRL.
    pub fn with_investment_in_brl(mut self) -> Self {
        self.dados.investimento_por_estado = self
            .dados
            .investimento_por_estado
            .into_iter()
            .map(StateInvestment::in_absolute_brl)
            .collect();
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Loose-typed field parsing
// ═══════════════════════════════════════════════════════════════════════════

/// Accepts a year as a number or as a string ("2024"); the dashboard schema
/// requests years as strings while the report schema requests numbers.
fn year_from_loose<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .ok_or_else(|| de::Error::custom("year out of range")),
        Value::String(s) => s
            .trim()
            .parse::<u16>()
            .map_err(|_| de::Error::custom(format!("invalid year: {s:?}"))),
        other => Err(de::Error::custom(format!(
            "expected year as number or string, got {other}"
        ))),
    }
}

/// Accepts a count as an integer or a float (the dashboard schema declares
/// NUMBER and the model occasionally returns `12000.0`).
fn count_from_loose<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .ok_or_else(|| de::Error::custom("count out of range")),
        other => Err(de::Error::custom(format!(
            "expected count as number, got {other}"
        ))),
    }
}
