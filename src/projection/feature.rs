use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use serde::Serialize;

use super::format::{DisplayZone, PLACEHOLDER, abbreviate_cases, format_updated};
use crate::model::CountryRecord;

pub const CASES_LABEL_KEY: &str = "casesLabel";
pub const UPDATED_FORMATTED_KEY: &str = "updatedFormatted";

/// Map-ready countries plus the names of the records that had no location.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectedFeatures {
    pub collection: FeatureCollection,
    pub skipped: Vec<String>,
}

impl ProjectedFeatures {
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.features.is_empty()
    }
}

/// Projects country records into point features, preserving input order.
///
/// Records without both `lat` and `long` are left out of the collection and
/// listed in [`ProjectedFeatures::skipped`] instead.
#[must_use]
pub fn project(countries: &[CountryRecord], zone: DisplayZone) -> ProjectedFeatures {
    let mut features = Vec::with_capacity(countries.len());
    let mut skipped = Vec::new();

    for record in countries {
        match project_country(record, zone) {
            Some(feature) => features.push(feature),
            None => skipped.push(record.country.clone()),
        }
    }

    ProjectedFeatures {
        collection: FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        },
        skipped,
    }
}

#[must_use]
pub fn project_country(record: &CountryRecord, zone: DisplayZone) -> Option<Feature> {
    let [longitude, latitude] = record.coordinates()?;

    let mut properties: JsonObject = record.raw.clone();
    let cases_label = record
        .counts
        .cases
        .map_or_else(|| PLACEHOLDER.to_string(), abbreviate_cases);
    properties.insert(CASES_LABEL_KEY.to_string(), JsonValue::String(cases_label));
    properties.insert(
        UPDATED_FORMATTED_KEY.to_string(),
        JsonValue::String(format_updated(record.updated, zone)),
    );

    Some(Feature {
        bbox: None,
        // GeoJSON positions are longitude first.
        geometry: Some(Geometry::new(Value::Point(vec![longitude, latitude]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}
