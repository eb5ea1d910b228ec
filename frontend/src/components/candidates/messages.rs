use common::model::candidate::{Candidate, CouncilType};

pub enum Msg {
    /// Fetch the list; `force` skips the local cache.
    Load { force: bool },
    Loaded {
        candidates: Vec<Candidate>,
        refreshed: bool,
    },
    SetCouncilType(CouncilType),
    SetSearch(String),
    SetGroup(String),
    ShowDetail(String),
    CloseDetail,
}
