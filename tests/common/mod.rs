use centerpick::{CenterRequest, CentersResponse, FilterSpec, PickerHost, Session};

/// Host that queues requests so tests decide when (and in which order)
/// responses arrive
#[derive(Debug, Default)]
pub struct QueueHost {
    pub sent: Vec<CenterRequest>,
    pub restrictions: Vec<FilterSpec>,
}

impl PickerHost for QueueHost {
    fn send_center_request(&mut self, params: CenterRequest) {
        self.sent.push(params);
    }

    fn non_empty_vertex_filter_names(&self) -> Vec<FilterSpec> {
        self.restrictions.clone()
    }
}

/// Centers numbered from the request offset
pub fn centers_for(request: &CenterRequest) -> CentersResponse {
    let start = request.offset.unwrap_or(0);
    CentersResponse {
        centers: (start..start + request.count).map(|i| i.to_string()).collect(),
    }
}

/// Answer the `index`-th dispatched request successfully
pub fn respond(session: &mut Session<QueueHost>, index: usize) {
    let request = session.host().sent[index].clone();
    let response = centers_for(&request);
    session
        .complete(request, Ok(response))
        .expect("applying response failed");
}

pub fn offsets(session: &Session<QueueHost>) -> Vec<Option<u64>> {
    session.host().sent.iter().map(|r| r.offset).collect()
}
