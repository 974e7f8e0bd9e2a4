/// Run state definitions for the pagination loop
///
/// A run is either walking pages or finished; the reason it finished is kept
/// for the end-of-run statistics.
use std::fmt;

/// Why a scrape run stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The last page had no next-page link
    NoNextPage,

    /// The next-page link pointed back at the current page
    SelfReferentialLink,

    /// A page could not be fetched after every attempt
    FetchFailed {
        /// The page that failed
        url: String,
    },
}

impl StopReason {
    /// Returns true if the listing was walked to its end
    pub fn is_complete(&self) -> bool {
        !matches!(self, Self::FetchFailed { .. })
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoNextPage => write!(f, "no next page"),
            Self::SelfReferentialLink => write!(f, "next page links to itself"),
            Self::FetchFailed { url } => write!(f, "failed to fetch {}", url),
        }
    }
}

/// State of the pagination loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    /// There is a page left to fetch
    Running {
        /// Absolute URL of the page to fetch next
        current: String,
    },

    /// No page left to fetch
    Done {
        /// Why the run ended
        reason: StopReason,
    },
}

impl RunState {
    /// Initial state for a run starting at `start_url`
    pub fn start(start_url: impl Into<String>) -> Self {
        Self::Running {
            current: start_url.into(),
        }
    }

    /// Decides the next state once `current` has been processed
    ///
    /// The self-link guard is a literal string comparison; URLs that differ
    /// only textually (trailing slash, query order) count as different pages.
    pub fn advance(current: &str, next: Option<String>) -> Self {
        match next {
            Some(next) if next == current => Self::Done {
                reason: StopReason::SelfReferentialLink,
            },
            Some(next) => Self::Running { current: next },
            None => Self::Done {
                reason: StopReason::NoNextPage,
            },
        }
    }

    /// Terminal state after a page failed to fetch
    pub fn fetch_failed(url: impl Into<String>) -> Self {
        Self::Done {
            reason: StopReason::FetchFailed { url: url.into() },
        }
    }

    /// Returns true if the loop should keep going
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Returns true if this is the terminal state
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }
}
