//! Reshaping of the loosely-typed rows the AI returns.

use serde_json::{Map, Value};
use std::collections::HashMap;

use super::records::{
    IndustryGrowth, RawIndustryRow, RawStartupRow, RawStateRow, StartupYearCount,
    StateInvestmentTotal,
};
use super::states::normalize_name;

impl From<RawStartupRow> for StartupYearCount {
    fn from(raw: RawStartupRow) -> Self {
        Self {
            year: raw.ano,
            count: raw.startups_por_ano,
            status: raw.data_tipo,
        }
    }
}

impl From<RawIndustryRow> for IndustryGrowth {
    fn from(raw: RawIndustryRow) -> Self {
        Self {
            year: raw.ano,
            value_percent: raw.crescimento_industria,
            status: raw.data_tipo,
        }
    }
}

/// Turns the `{sigla: milhões}` map of the investment call into rows.
///
/// Non-numeric values are dropped, matching what the frontend tolerates.
pub fn investment_map_to_rows(map: &Map<String, Value>) -> Vec<StateInvestmentTotal> {
    map.iter()
        .filter_map(|(state, value)| {
            value.as_f64().map(|investment_million_brl| StateInvestmentTotal {
                state: state.clone(),
                investment_million_brl,
            })
        })
        .collect()
}

/// Sums the per-state maps of every row into one total per state.
///
/// State keys are merged after accent/case normalization so that spelling
/// variants ("São Paulo" / "Sao Paulo") land in the same bucket; the
/// first-seen spelling is kept for display and first-seen order is
/// preserved.
pub fn aggregate_state_investment(rows: &[RawStateRow]) -> Vec<StateInvestmentTotal> {
    let mut totals: Vec<StateInvestmentTotal> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let Some(map) = &row.investimento_por_estado else {
            continue;
        };
        for (state, value) in map {
            let Some(amount) = value.as_f64() else {
                continue;
            };
            let key = normalize_name(state);
            match index_by_key.get(&key) {
                Some(&i) => totals[i].investment_million_brl += amount,
                None => {
                    index_by_key.insert(key, totals.len());
                    totals.push(StateInvestmentTotal {
                        state: state.clone(),
                        investment_million_brl: amount,
                    });
                }
            }
        }
    }

    totals
}
