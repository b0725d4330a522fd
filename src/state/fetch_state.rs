use crate::api::FetchResult;

/// What a view currently knows about one fetch target.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// No fetch issued yet
    Idle,
    /// A request is in flight
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<FetchResult<T>> for FetchState<T> {
    fn from(result: FetchResult<T>) -> Self {
        match result {
            FetchResult::Success(data) => FetchState::Success(data),
            FetchResult::Failure(e) => FetchState::Error(e.to_string()),
        }
    }
}
