//! Team statistic rows as they arrive from storage or import files.

use crate::cli::types::ids::TeamId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One team's aggregate statistics for a period or season.
///
/// Category values are kept loosely typed; `value()` does the coercion so a
/// malformed cell can never break a sort. Identity fields are read leniently
/// too: `"teamId": "7"` is team 7, an unusable id is `None` and a null name
/// is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatLine {
    #[serde(
        default,
        deserialize_with = "lenient_team_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_id: Option<TeamId>,
    #[serde(default, deserialize_with = "lenient_team_name")]
    pub team_name: String,
    #[serde(flatten)]
    pub stats: BTreeMap<String, Value>,
}

impl TeamStatLine {
    pub fn new(team_id: TeamId, team_name: &str) -> Self {
        Self {
            team_id: Some(team_id),
            team_name: team_name.to_string(),
            stats: BTreeMap::new(),
        }
    }

    /// Builder-style setter used when assembling lines from storage.
    pub fn with_stat(mut self, key: &str, value: f64) -> Self {
        self.set_stat(key, value);
        self
    }

    pub fn set_stat(&mut self, key: &str, value: f64) {
        let json = serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        self.stats.insert(key.to_string(), json);
    }

    /// Numeric value for a category; missing or unparseable values are 0.
    pub fn value(&self, key: &str) -> f64 {
        self.stats.get(key).map(coerce_stat).unwrap_or(0.0)
    }
}

/// Safe numeric coercion for a raw stat cell.
///
/// Numbers pass through, numeric strings are parsed (`".275"` and `"1,024"`
/// both work), everything else including NaN/inf becomes 0.
pub fn coerce_stat(raw: &Value) -> f64 {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn lenient_team_id<'de, D>(deserializer: D) -> Result<Option<TeamId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let id = match raw {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(id.and_then(|id| u32::try_from(id).ok()).map(TeamId::new))
}

fn lenient_team_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}
