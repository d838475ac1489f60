//! Candidate request construction from the picker's UI fields

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};
use crate::filters::FilterList;
use crate::host::PickerHost;
use crate::types::{CenterRequest, DEFAULT_COUNT, FilterSpec};

/// UI-local picker fields. Never persisted directly; they are rebuilt from
/// the last successful request on every reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerFields {
    pub count: String,
    pub filters: FilterList,
}

impl Default for PickerFields {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT.to_string(),
            filters: FilterList::new(),
        }
    }
}

impl PickerFields {
    /// Mirror `last` exactly, or fall back to the defaults.
    pub fn reset_from(&mut self, last: Option<&CenterRequest>) {
        match last {
            Some(req) => {
                self.count = req.count.to_string();
                self.filters.replace_all(req.filters.clone());
            }
            None => *self = Self::default(),
        }
    }
}

fn parse_count(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| PickerError::InvalidCount(raw.to_string()))
}

/// Build the parameters the next request would carry.
///
/// With custom filters the edited rows are used, minus incomplete ones;
/// otherwise the host's current restrictions. The offset is left unset.
pub fn build<H: PickerHost + ?Sized>(
    fields: &PickerFields,
    custom_filters_enabled: bool,
    host: &H,
) -> Result<CenterRequest> {
    let count = parse_count(&fields.count)?;
    let filters: Vec<FilterSpec> = if custom_filters_enabled {
        fields.filters.complete()
    } else {
        host.non_empty_vertex_filter_names()
    };

    Ok(CenterRequest {
        count,
        filters,
        offset: None,
    })
}
