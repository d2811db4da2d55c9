use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::stats::CaseCounts;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CountryInfo {
    #[serde(rename = "_id", default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
    #[serde(default)]
    pub flag: Option<String>,
}

/// Maps a JSON `null` to the type's default instead of failing the decode.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountryFields {
    #[serde(default, deserialize_with = "null_as_default")]
    country: String,
    #[serde(default)]
    country_info: Option<CountryInfo>,
    #[serde(default)]
    updated: Option<i64>,
    #[serde(flatten)]
    counts: CaseCounts,
    #[serde(default)]
    continent: Option<String>,
}

/// One row of the `/countries` endpoint.
///
/// The typed fields are a read-only view; `raw` is the object exactly as the
/// API sent it, nulls included, and is what gets serialized back out.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct CountryRecord {
    pub country: String,
    pub country_info: Option<CountryInfo>,
    pub updated: Option<i64>,
    pub counts: CaseCounts,
    pub continent: Option<String>,
    pub raw: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for CountryRecord {
    type Error = serde_json::Error;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: CountryFields = serde_json::from_value(Value::Object(raw.clone()))?;
        Ok(Self {
            country: fields.country,
            country_info: fields.country_info,
            updated: fields.updated,
            counts: fields.counts,
            continent: fields.continent,
            raw,
        })
    }
}

impl From<CountryRecord> for Map<String, Value> {
    fn from(record: CountryRecord) -> Self {
        record.raw
    }
}

impl CountryRecord {
    /// `[longitude, latitude]`, or `None` when either half is missing.
    #[must_use]
    pub fn coordinates(&self) -> Option<[f64; 2]> {
        let info = self.country_info.as_ref()?;
        Some([info.long?, info.lat?])
    }
}
