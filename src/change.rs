//! Pick/Next classification

use crate::error::{PickerError, Result};
use crate::host::PickerHost;
use crate::types::{CenterRequest, ResolvedParameters};

/// Ephemeral paging state of the picker. Lives only as long as the UI
/// session; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickOptions {
    /// Sum of the counts requested since the last fresh pick
    pub offset: u64,
    /// Resolved form of the request that started the current sample
    pub last_center_request_parameters: Option<ResolvedParameters>,
}

impl PickOptions {
    /// Options for a fresh sample starting at `baseline`
    pub fn fresh(baseline: ResolvedParameters) -> Self {
        Self {
            offset: 0,
            last_center_request_parameters: Some(baseline),
        }
    }
}

/// What a "request new centers" action turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickDecision {
    /// Parameters changed: start a new sample from the beginning
    NewPick,
    /// Same parameters as the current sample: page forward to `offset`
    Continuation { offset: u64 },
}

/// True when `candidate` resolves to the current baseline. An empty
/// baseline never matches.
pub fn unchanged<H: PickerHost + ?Sized>(
    candidate: &CenterRequest,
    options: &PickOptions,
    host: &H,
) -> bool {
    let resolved = host.resolve_center_request_params(candidate);
    options.last_center_request_parameters.as_ref() == Some(&resolved)
}

/// Decide between a fresh pick and a continuation without touching `options`.
///
/// Fails with [`PickerError::OffsetOverflow`] when the continuation offset
/// would not fit in a `u64`.
pub fn classify<H: PickerHost + ?Sized>(
    candidate: &CenterRequest,
    options: &PickOptions,
    host: &H,
) -> Result<PickDecision> {
    if !unchanged(candidate, options, host) {
        return Ok(PickDecision::NewPick);
    }
    let offset = options
        .offset
        .checked_add(candidate.count)
        .ok_or(PickerError::OffsetOverflow {
            offset: options.offset,
            count: candidate.count,
        })?;
    Ok(PickDecision::Continuation { offset })
}
