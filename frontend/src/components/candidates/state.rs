use std::rc::Rc;

use common::filter::{filter_candidates, CandidateFilter};
use common::model::candidate::Candidate;
use common::model::config::EndpointConfig;
use yew::prelude::*;

use crate::services::{candidate_service, BrowserCandidateService};

/// Runtime state of the candidate directory.
pub struct CandidateDirectory {
    /// Shared with in-flight fetches, which outlive a single `update` call.
    pub service: Rc<BrowserCandidateService>,

    /// Full list from the last fetch. Never filtered in place.
    pub candidates: Vec<Candidate>,

    pub filter: CandidateFilter,

    /// A fetch is in flight; the refresh button is disabled meanwhile.
    pub loading: bool,

    /// Set once the first fetch has resolved, so the empty state is not
    /// shown while loading.
    pub loaded: bool,

    pub selected: Option<Candidate>,

    pub sheet_ref: NodeRef,
}

impl CandidateDirectory {
    pub fn new(endpoints: &EndpointConfig) -> Self {
        Self {
            service: Rc::new(candidate_service(endpoints)),
            candidates: Vec::new(),
            filter: CandidateFilter::default(),
            loading: false,
            loaded: false,
            selected: None,
            sheet_ref: NodeRef::default(),
        }
    }

    /// The filtered, display-ordered subset.
    pub fn visible(&self) -> Vec<Candidate> {
        filter_candidates(&self.candidates, &self.filter)
    }
}
