use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scraped draw: the date label and the winning number string, both kept
/// exactly as rendered on the source page. Field names are the wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub tanggal: String,
    pub hasil: String,
}

/// Raw page bodies handed from extract to transform. Built once per run and
/// never mutated.
#[derive(Debug, Clone)]
pub struct RawPages {
    pub pools_html: String,
    pub lotto_html: String,
}

/// The merged output record. Serializes with camelCase keys so the JSON file
/// carries exactly `lastUpdated`, `hkPools` and `hkLotto`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsBundle {
    pub last_updated: DateTime<Utc>,
    pub hk_pools: Vec<ResultEntry>,
    pub hk_lotto: Vec<ResultEntry>,
}
