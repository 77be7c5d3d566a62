//! State — a pre-seeded Indian state or union territory, plus the read
//! projections computed over its districts.

use serde::{Deserialize, Serialize};

use crate::id::StateId;
use crate::scalar::Scalar;

/// A state row as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub state_id: StateId,
    pub state_name: String,
    pub population: i64,
}

/// Case totals summed over every district of a state.
///
/// Each total is [`Scalar::Null`] when the state has no districts: this
/// mirrors SQL `SUM` over an empty set and must not be collapsed to zero.
/// A total is [`Scalar::Real`] when some summed cell is not an integer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateStats {
    pub total_cases: Scalar,
    pub total_cured: Scalar,
    pub total_active: Scalar,
    pub total_deaths: Scalar,
}

/// Name of the state owning a district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateName {
    pub state_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let state = State {
            state_id: StateId::new(17),
            state_name: "Kerala".to_string(),
            population: 33_406_061,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stateId": 17,
                "stateName": "Kerala",
                "population": 33_406_061,
            })
        );
    }

    #[test]
    fn should_serialize_empty_stats_as_nulls() {
        let json = serde_json::to_value(StateStats::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalCases": null,
                "totalCured": null,
                "totalActive": null,
                "totalDeaths": null,
            })
        );
    }
}
