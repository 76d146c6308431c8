//! Observable lifecycle events
//!
//! Every lifecycle log line carries an `event` field with one of these
//! names, so logs can be filtered without parsing messages.

use std::fmt;

/// Observable events in strlens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP server bound and serving
    ServerStart,
    /// HTTP server stopped
    ServerStop,

    // Store
    /// Record store opened
    StoreOpened,
    /// Store log replayed on open
    StoreReplayed,
    /// Store operation failed (I/O or corruption)
    StoreFailed,

    // Records
    /// New record persisted
    RecordCreated,
    /// Submission rejected as a duplicate
    DuplicateRejected,
    /// Record deleted
    RecordDeleted,
    /// Request validation failed
    RequestRejected,

    // Queries
    /// Filtered listing served
    ListServed,
    /// Natural-language phrase interpreted
    QueryInterpreted,
    /// Natural-language phrase could not be interpreted
    QueryUnparseable,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerStop => "SERVER_STOP",

            Event::StoreOpened => "STORE_OPENED",
            Event::StoreReplayed => "STORE_REPLAYED",
            Event::StoreFailed => "STORE_FAILED",

            Event::RecordCreated => "RECORD_CREATED",
            Event::DuplicateRejected => "DUPLICATE_REJECTED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",

            Event::ListServed => "LIST_SERVED",
            Event::QueryInterpreted => "QUERY_INTERPRETED",
            Event::QueryUnparseable => "QUERY_UNPARSEABLE",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::ServerStart,
            Event::ServerStop,
            Event::StoreOpened,
            Event::StoreReplayed,
            Event::StoreFailed,
            Event::RecordCreated,
            Event::DuplicateRejected,
            Event::RecordDeleted,
            Event::RequestRejected,
            Event::ListServed,
            Event::QueryInterpreted,
            Event::QueryUnparseable,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::RecordCreated), "RECORD_CREATED");
        assert_eq!(format!("{}", Event::StoreOpened), "STORE_OPENED");
    }
}
