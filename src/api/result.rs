use super::error::FetchError;

/// Outcome of a catalog call. Exactly one of payload or error is present; a
/// failure always carries a non-empty message.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult<T> {
    Success(T),
    Failure(FetchError),
}

impl<T> FetchResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchResult::Success(data) => Some(data),
            FetchResult::Failure(_) => None,
        }
    }

    /// Display message of the failure.
    pub fn error(&self) -> Option<String> {
        match self {
            FetchResult::Success(_) => None,
            FetchResult::Failure(e) => Some(e.to_string()),
        }
    }

    /// HTTP status of an upstream error response, if the failure was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchResult::Success(_) => None,
            FetchResult::Failure(e) => e.status(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResult<U> {
        match self {
            FetchResult::Success(data) => FetchResult::Success(f(data)),
            FetchResult::Failure(e) => FetchResult::Failure(e),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, FetchError>) -> FetchResult<U> {
        match self {
            FetchResult::Success(data) => f(data).into(),
            FetchResult::Failure(e) => FetchResult::Failure(e),
        }
    }

    pub fn into_result(self) -> Result<T, FetchError> {
        match self {
            FetchResult::Success(data) => Ok(data),
            FetchResult::Failure(e) => Err(e),
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchResult<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => FetchResult::Success(data),
            Err(e) => FetchResult::Failure(e),
        }
    }
}
