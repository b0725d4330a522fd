use crate::state::FetchState;

/// What a page shows for a fetch target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    Error(String),
    Empty,
    Ready,
}

impl PageStatus {
    /// Status for a collection; a successful fetch of nothing is `Empty`.
    pub fn for_list<T>(state: &FetchState<Vec<T>>) -> Self {
        match state {
            FetchState::Idle | FetchState::Loading => PageStatus::Loading,
            FetchState::Error(message) => PageStatus::Error(message.clone()),
            FetchState::Success(items) if items.is_empty() => PageStatus::Empty,
            FetchState::Success(_) => PageStatus::Ready,
        }
    }

    pub fn for_item<T>(state: &FetchState<T>) -> Self {
        match state {
            FetchState::Idle | FetchState::Loading => PageStatus::Loading,
            FetchState::Error(message) => PageStatus::Error(message.clone()),
            FetchState::Success(_) => PageStatus::Ready,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageStatus::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PageStatus::Error(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PageStatus::Empty)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PageStatus::Ready)
    }

    pub fn error_message(&self) -> &str {
        match self {
            PageStatus::Error(message) => message,
            _ => "",
        }
    }
}
