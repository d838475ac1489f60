use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::PickerError;

pub const STATE_DIR: &str = ".centerpick";

/// Count shown in the picker when no previous request exists
pub const DEFAULT_COUNT: &str = "1";

/// A single attribute restriction, e.g. `age` / `>10`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub attribute_name: String,
    pub value_spec: String,
}

impl FilterSpec {
    pub fn new(attribute_name: impl Into<String>, value_spec: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            value_spec: value_spec.into(),
        }
    }

    /// A row is incomplete until an attribute has been chosen
    pub fn is_complete(&self) -> bool {
        !self.attribute_name.is_empty()
    }
}

/// Parameters of one center sampling request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterRequest {
    pub count: u64,
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

/// Backend answer to a [`CenterRequest`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentersResponse {
    pub centers: Vec<String>,
}

/// Coarse display mode of the graph view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    Sampled,
    Bucketed,
}

enum_display_fromstr!(
    GraphMode,
    PickerError::InvalidGraphMode,
    {
        Sampled => "sampled",
        Bucketed => "bucketed",
    }
);

/// Normalized, comparison-only form of a [`CenterRequest`].
///
/// Hosts are free to build this however they like (for example substituting
/// derived restrictions for equivalent explicit filters). The picker never
/// looks inside; it only tests two values for equality.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameters(Value);

impl ResolvedParameters {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Canonical normalization: count and filters, offset ignored.
    pub fn of(params: &CenterRequest) -> Self {
        let filters: Vec<Value> = params
            .filters
            .iter()
            .map(|f| json!({ "attributeName": f.attribute_name, "valueSpec": f.value_spec }))
            .collect();
        Self(json!({ "count": params.count, "filters": filters }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
