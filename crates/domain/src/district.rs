//! District — per-state case counters, the only writable table.

use serde::{Deserialize, Serialize};

use crate::id::{DistrictId, StateId};
use crate::scalar::Scalar;

/// A district row as exposed by the API.
///
/// Counters are returned exactly as storage holds them: normally integers,
/// but a client may have stored text that the column could not convert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub district_id: DistrictId,
    pub district_name: String,
    pub state_id: StateId,
    pub cases: Scalar,
    pub cured: Scalar,
    pub active: Scalar,
    pub deaths: Scalar,
}

/// The writable fields of a district, as received on create and update.
///
/// Nothing is validated here. Each field is whatever JSON scalar the client
/// sent, absent fields are [`Scalar::Null`], and the storage schema decides
/// what is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DistrictDetails {
    pub district_name: Scalar,
    pub state_id: Scalar,
    pub cases: Scalar,
    pub cured: Scalar,
    pub active: Scalar,
    pub deaths: Scalar,
}
