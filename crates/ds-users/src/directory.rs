//! User directory
//!
//! Read-only queries over the example user set. Lookups never fail: an id
//! that matches nothing, or no id at all, resolves to the fallback user.

use std::sync::Arc;

use ds_core::sendlog::{LogSink, TracingLogSink};
use tracing::{debug, warn};

use crate::data::EXAMPLE_USERS;
use crate::model::{UserRecord, UserSummary};

/// Destination that successful id lookups are logged to
pub const LOOKUP_LOG_DESTINATION: &str = "common.log";

/// Outcome of an id lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// A record with the requested id exists
    Found(&'a UserRecord),
    /// Nothing matched; the fallback record stands in
    Defaulted(&'a UserRecord),
}

impl<'a> Lookup<'a> {
    pub fn record(&self) -> &'a UserRecord {
        match *self {
            Lookup::Found(user) | Lookup::Defaulted(user) => user,
        }
    }

    pub fn into_record(self) -> &'a UserRecord {
        self.record()
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Directory over the process-wide example users
#[derive(Clone)]
pub struct UserDirectory {
    users: &'static [UserRecord],
    sink: Arc<dyn LogSink>,
}

impl std::fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectory")
            .field("users", &self.users.len())
            .finish_non_exhaustive()
    }
}

impl UserDirectory {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            users: EXAMPLE_USERS.as_slice(),
            sink,
        }
    }

    /// Directory whose lookup log goes to the tracing subscriber
    pub fn with_tracing() -> Self {
        Self::new(Arc::new(TracingLogSink))
    }

    /// All users, in construction order
    pub fn list_all(&self) -> &[UserRecord] {
        self.users
    }

    /// The record returned when a lookup misses
    pub fn fallback(&self) -> &UserRecord {
        &self.users[0]
    }

    /// Find a user by id, falling back to the default user on a miss
    pub fn find_by_id(&self, id: Option<&str>) -> &UserRecord {
        self.lookup(id).into_record()
    }

    /// Like [`find_by_id`](Self::find_by_id), but tells whether the
    /// fallback was used
    pub fn lookup(&self, id: Option<&str>) -> Lookup<'_> {
        let matched = id.and_then(|id| self.users.iter().find(|user| user.id == id));

        match matched {
            Some(user) => {
                let message = format!("User {}", user.id);
                if let Err(e) = self.sink.send(&message, LOOKUP_LOG_DESTINATION) {
                    warn!(
                        user_id = %user.id,
                        error = %e,
                        "Failed to write lookup log entry"
                    );
                }
                Lookup::Found(user)
            }
            None => {
                debug!(requested = ?id, "No user matched, using fallback");
                Lookup::Defaulted(self.fallback())
            }
        }
    }

    /// Contacts other than `excluding`; users without name or email are left out
    pub fn list_others(&self, excluding: Option<&str>) -> Vec<UserSummary> {
        self.users
            .iter()
            .filter(|user| Some(user.id.as_str()) != excluding)
            .filter_map(UserRecord::summary)
            .collect()
    }
}
