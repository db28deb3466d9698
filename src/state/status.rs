/// Fetch status and staleness tracking shared by both fetchers

/// Lifecycle of one fetcher's current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus<T, E> {
    /// Nothing requested yet (or the owning view was closed)
    Idle,
    /// A request is in flight; no payload is exposed meanwhile
    Loading,
    Success(T),
    Failed(E),
}

impl<T, E: std::fmt::Display> FetchStatus<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    /// Committed payload, if the last request succeeded
    pub fn payload(&self) -> Option<&T> {
        match self {
            FetchStatus::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// User-visible message, if the last request failed
    pub fn error_message(&self) -> Option<String> {
        match self {
            FetchStatus::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Proof that a request was issued at a particular generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Monotonic request counter. Only the most recently issued ticket is current.
#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// Issue a new ticket, making every earlier ticket stale
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    /// Make every outstanding ticket stale without issuing a new one
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut generation = Generation::default();
        let first = generation.issue();
        assert!(generation.is_current(first));

        let second = generation.issue();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_invalidate_stales_everything() {
        let mut generation = Generation::default();
        let ticket = generation.issue();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn test_status_accessors() {
        let status: FetchStatus<u32, String> = FetchStatus::Failed("boom".into());
        assert!(!status.is_loading());
        assert_eq!(status.payload(), None);
        assert_eq!(status.error_message().as_deref(), Some("boom"));

        let status: FetchStatus<u32, String> = FetchStatus::Success(7);
        assert_eq!(status.payload(), Some(&7));
        assert_eq!(status.error_message(), None);
    }
}
