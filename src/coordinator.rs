//! Pick/Next request coordination
//!
//! Every "request new centers" action goes through [`RequestCoordinator`]:
//! the candidate parameters are built from the UI fields, classified
//! against the current sample, and handed to the host sender. A fresh pick
//! replaces the paging state wholesale; a continuation advances the offset
//! by the requested count.

use tracing::{debug, info};

use crate::change::{self, PickDecision, PickOptions};
use crate::error::Result;
use crate::host::PickerHost;
use crate::params::{self, PickerFields};

/// Where the coordinator is within a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickPhase {
    /// No request has been made yet
    #[default]
    Idle,
    /// A fresh pick set the baseline
    Baseline,
    /// One or more continuations followed the baseline
    Advancing,
}

#[derive(Debug, Clone, Default)]
pub struct RequestCoordinator {
    options: PickOptions,
    phase: PickPhase,
}

impl RequestCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume with options kept from an earlier picker instance
    pub fn with_options(options: PickOptions) -> Self {
        let phase = match (&options.last_center_request_parameters, options.offset) {
            (None, _) => PickPhase::Idle,
            (Some(_), 0) => PickPhase::Baseline,
            (Some(_), _) => PickPhase::Advancing,
        };
        Self { options, phase }
    }

    pub fn options(&self) -> &PickOptions {
        &self.options
    }

    pub fn phase(&self) -> PickPhase {
        self.phase
    }

    pub fn into_options(self) -> PickOptions {
        self.options
    }

    /// Build, classify and dispatch one request.
    ///
    /// The host sender is invoked on both branches and its outcome is not
    /// awaited. Nothing is sent if the count field does not parse or the
    /// next offset would overflow.
    pub fn request_new_centers<H: PickerHost + ?Sized>(
        &mut self,
        fields: &PickerFields,
        custom_filters_enabled: bool,
        host: &mut H,
    ) -> Result<PickDecision> {
        let mut params = params::build(fields, custom_filters_enabled, &*host)?;
        let decision = change::classify(&params, &self.options, &*host)?;

        match decision {
            PickDecision::Continuation { offset } => {
                debug!(offset, count = params.count, "parameters unchanged, paging forward");
                params.offset = Some(offset);
                self.options.offset = offset;
                self.phase = PickPhase::Advancing;
            }
            PickDecision::NewPick => {
                debug!(count = params.count, "parameters changed, starting new pick");
                self.options = PickOptions::fresh(host.resolve_center_request_params(&params));
                self.phase = PickPhase::Baseline;
            }
        }

        info!(
            count = params.count,
            filters = params.filters.len(),
            offset = ?params.offset,
            "dispatching center request"
        );
        host.send_center_request(params);
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickerError;
    use crate::filters::FilterList;
    use crate::testing::RecordingHost;
    use crate::types::FilterSpec;

    fn fields(count: &str) -> PickerFields {
        PickerFields {
            count: count.to_string(),
            filters: FilterList::from(vec![FilterSpec::new("age", ">10")]),
        }
    }

    #[test]
    fn test_first_request_is_new_pick() {
        let mut host = RecordingHost::default();
        let mut coordinator = RequestCoordinator::new();
        assert_eq!(coordinator.phase(), PickPhase::Idle);

        let decision = coordinator
            .request_new_centers(&fields("2"), true, &mut host)
            .unwrap();

        assert_eq!(decision, PickDecision::NewPick);
        assert_eq!(coordinator.phase(), PickPhase::Baseline);
        assert_eq!(coordinator.options().offset, 0);
        assert_eq!(host.sent.len(), 1);
        assert_eq!(host.sent[0].offset, None);
    }

    #[test]
    fn test_continuation_offsets_accumulate() {
        let mut host = RecordingHost::default();
        let mut coordinator = RequestCoordinator::new();
        let f = fields("3");

        for _ in 0..4 {
            coordinator.request_new_centers(&f, true, &mut host).unwrap();
        }

        let offsets: Vec<Option<u64>> = host.sent.iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![None, Some(3), Some(6), Some(9)]);
        assert_eq!(coordinator.options().offset, 9);
        assert_eq!(coordinator.phase(), PickPhase::Advancing);
    }

    #[test]
    fn test_new_pick_resets_offset() {
        let mut host = RecordingHost::default();
        let mut coordinator = RequestCoordinator::new();
        let mut f = fields("2");

        coordinator.request_new_centers(&f, true, &mut host).unwrap();
        coordinator.request_new_centers(&f, true, &mut host).unwrap();
        assert_eq!(coordinator.options().offset, 2);

        f.filters.get_mut(0).unwrap().value_spec = ">20".to_string();
        let decision = coordinator.request_new_centers(&f, true, &mut host).unwrap();

        assert_eq!(decision, PickDecision::NewPick);
        assert_eq!(coordinator.options().offset, 0);
        assert_eq!(host.sent.last().unwrap().offset, None);
        assert_eq!(coordinator.phase(), PickPhase::Baseline);
    }

    #[test]
    fn test_zero_count_continuation_does_not_advance() {
        let mut host = RecordingHost::default();
        let mut coordinator = RequestCoordinator::new();
        let f = fields("0");

        coordinator.request_new_centers(&f, true, &mut host).unwrap();
        let decision = coordinator.request_new_centers(&f, true, &mut host).unwrap();

        assert_eq!(decision, PickDecision::Continuation { offset: 0 });
        assert_eq!(host.sent[1].offset, Some(0));
        assert_eq!(coordinator.phase(), PickPhase::Advancing);
    }

    #[test]
    fn test_invalid_count_sends_nothing_and_keeps_options() {
        let mut host = RecordingHost::default();
        let mut coordinator = RequestCoordinator::new();
        coordinator
            .request_new_centers(&fields("2"), true, &mut host)
            .unwrap();
        let before = coordinator.options().clone();

        assert!(
            coordinator
                .request_new_centers(&fields("x"), true, &mut host)
                .is_err()
        );
        assert_eq!(host.sent.len(), 1);
        assert_eq!(coordinator.options(), &before);
    }

    #[test]
    fn test_offset_overflow_sends_nothing_and_keeps_options() {
        let mut host = RecordingHost::default();
        let mut coordinator = RequestCoordinator::new();
        let f = fields(&u64::MAX.to_string());

        assert_eq!(
            coordinator.request_new_centers(&f, true, &mut host).unwrap(),
            PickDecision::NewPick
        );
        assert_eq!(
            coordinator.request_new_centers(&f, true, &mut host).unwrap(),
            PickDecision::Continuation { offset: u64::MAX }
        );
        let before = coordinator.options().clone();

        assert!(matches!(
            coordinator.request_new_centers(&f, true, &mut host),
            Err(PickerError::OffsetOverflow { .. })
        ));
        assert_eq!(host.sent.len(), 2);
        assert_eq!(coordinator.options(), &before);
        assert_eq!(coordinator.phase(), PickPhase::Advancing);
    }

    #[test]
    fn test_count_change_under_count_blind_resolver_continues() {
        // When the resolver ignores the count, changing it keeps the streak
        // and the offset grows by whatever count is requested now.
        let mut host = RecordingHost {
            ignore_count_in_resolution: true,
            ..Default::default()
        };
        let mut coordinator = RequestCoordinator::new();

        coordinator
            .request_new_centers(&fields("2"), true, &mut host)
            .unwrap();
        let decision = coordinator
            .request_new_centers(&fields("5"), true, &mut host)
            .unwrap();

        assert_eq!(decision, PickDecision::Continuation { offset: 5 });
    }

    #[test]
    fn test_with_options_restores_phase() {
        let mut host = RecordingHost::default();
        let mut first = RequestCoordinator::new();
        let f = fields("1");
        first.request_new_centers(&f, true, &mut host).unwrap();
        first.request_new_centers(&f, true, &mut host).unwrap();

        let mut second = RequestCoordinator::with_options(first.into_options());
        assert_eq!(second.phase(), PickPhase::Advancing);

        let decision = second.request_new_centers(&f, true, &mut host).unwrap();
        assert_eq!(decision, PickDecision::Continuation { offset: 2 });
    }
}
