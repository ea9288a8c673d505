//! Availability query parameters and their defaults

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Route queried when the caller does not name one
pub const DEFAULT_ROUTE: &str = "7";

/// Location sent with every availability query
pub const DEFAULT_LOCATION_ID: u32 = 1;

/// A scalar parameter as sent by the caller.
///
/// Front-ends send these either as strings or as numbers; the value is
/// forwarded as its textual form without range checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            // whole floats print without a fraction (3.0 is "3")
            Self::Number(n) => match n.as_f64() {
                Some(v) if n.is_f64() => write!(f, "{}", v),
                _ => write!(f, "{}", n),
            },
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Inbound availability parameters; every field is optional.
///
/// Only a JSON object is accepted. Unknown keys are ignored and `null`
/// counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AvailabilityParams {
    pub route: Option<ParamValue>,
    pub year: Option<ParamValue>,
    pub month: Option<ParamValue>,
}

impl<'de> Deserialize<'de> for AvailabilityParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ParamsVisitor;

        impl<'de> Visitor<'de> for ParamsVisitor {
            type Value = AvailabilityParams;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object with optional route, year and month")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut params = AvailabilityParams::default();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "route" => params.route = map.next_value()?,
                        "year" => params.year = map.next_value()?,
                        "month" => params.month = map.next_value()?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}

impl AvailabilityParams {
    /// Fill in the defaults relative to `today` and attach the location
    pub fn resolve(self, today: NaiveDate, location_id: u32) -> AvailabilityQuery {
        AvailabilityQuery {
            route: self
                .route
                .map(|v| v.to_string())
                .unwrap_or_else(|| DEFAULT_ROUTE.to_string()),
            year: self
                .year
                .map(|v| v.to_string())
                .unwrap_or_else(|| today.year().to_string()),
            month: self
                .month
                .map(|v| v.to_string())
                .unwrap_or_else(|| today.month().to_string()),
            location_id,
        }
    }
}

/// Fully resolved query sent upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub route: String,
    pub year: String,
    pub month: String,
    pub location_id: u32,
}

impl AvailabilityQuery {
    /// Query-string pairs in the order the upstream documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("idRuta", self.route.clone()),
            ("anio", self.year.clone()),
            ("mes", self.month.clone()),
            ("idLugar", self.location_id.to_string()),
        ]
    }
}
