use crate::value::{Timestamp, Value};
use serde_json::{Map, Number, Value as Json};

// JSON bridge used by record conversion and fixture loading.
//
// Nested objects other than the timestamp marker have no `Value`
// counterpart; they are flattened to their JSON text so nothing is lost.

impl Value {
    /// Decode a JSON value, recognising the `$timestamp` marker object.
    #[must_use]
    pub fn from_json(json: &Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(*b),
            Json::Number(n) => number_to_value(n),
            Json::String(s) => Self::Text(s.clone()),
            Json::Array(items) => Self::List(items.iter().map(Self::from_json).collect()),
            Json::Object(map) => timestamp_from_object(map)
                .map_or_else(|| Self::Text(json.to_string()), Self::Timestamp),
        }
    }

    /// Encode to JSON; timestamps use the `$timestamp` marker object.
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Int(n) => Json::Number(Number::from(*n)),
            Self::Float(f) => Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Self::Timestamp(ts) => serde_json::to_value(ts).unwrap_or(Json::Null),
            Self::Text(s) => Json::String(s.clone()),
            Self::List(items) => Json::Array(items.iter().map(Self::to_json).collect()),
        }
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else {
        Value::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn timestamp_from_object(map: &Map<String, Json>) -> Option<Timestamp> {
    if map.len() != 1 || !map.contains_key("$timestamp") {
        return None;
    }

    serde_json::from_value(Json::Object(map.clone())).ok()
}
