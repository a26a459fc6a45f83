//! The root state container.
//!
//! ```text
//!                       ┌──────────────────────────────────────┐
//!   dispatch(command) ─►│ queue ─► composite reducer ─► state  │──► subscribers
//!                       │   ▲                                  │
//!                       │   └──── policy follow-up ◄───────────│
//!                       └──────────────────────────────────────┘
//! ```
//!
//! A [`Store`] owns the [`RootState`] and is the only thing that changes it.
//! Each call to [`Store::dispatch`] applies the command, asks the [`Policy`]
//! for a follow-up (an edit yields a save of the edited domain) and drains the
//! resulting queue before returning, so a domain's snapshot on disk matches
//! memory as soon as `dispatch` returns.

pub mod error;
pub mod policy;
pub mod reducer;
pub mod root;

use std::collections::VecDeque;

use eyeball::{Observable, Subscriber};

pub use error::{Operation, OperationError};
pub use policy::{NoFollowUp, PersistAfterEdit, Policy};
pub use reducer::{CommandPrism, Combine, FnReducer, Pullback, Reducer, StateLens};
pub use root::{PersistCommand, PersistReducer, RootCommand, RootState, build_reducer};

use crate::persistence::{RoutingTable, SnapshotCodec};
use crate::settings::Domain;

/// Upper bound on reducer applications per `dispatch` call.
///
/// A well-formed policy settles in two steps; the bound stops a policy that
/// keeps producing follow-ups.
pub const MAX_DISPATCH_STEPS: usize = 16;

/// Owns the root state and serializes every change to it.
pub struct Store {
    state: Observable<RootState>,
    reducer: Combine<RootState, RootCommand>,
    policy: Box<dyn Policy>,
    routes: RoutingTable,
}

impl Store {
    /// Creates a store with default state, persisting under `routes`.
    #[must_use]
    pub fn new(routes: RoutingTable) -> Self { Self::with_policy(routes, PersistAfterEdit) }

    /// Creates a store with a custom follow-up policy.
    #[must_use]
    pub fn with_policy(routes: RoutingTable, policy: impl Policy + 'static) -> Self {
        Self {
            state: Observable::new(RootState::default()),
            reducer: build_reducer(&routes),
            policy: Box::new(policy),
            routes,
        }
    }

    /// The routing table this store persists to.
    #[must_use]
    pub const fn routes(&self) -> &RoutingTable { &self.routes }

    /// Applies `command` and every follow-up it triggers.
    ///
    /// Returns once the queue is empty. File I/O happens synchronously in
    /// here; failures land in [`Store::last_error`] rather than being
    /// returned.
    pub fn dispatch(&mut self, command: impl Into<RootCommand>) {
        let mut queue = VecDeque::from([command.into()]);
        let mut steps = 0;

        while let Some(command) = queue.pop_front() {
            if steps == MAX_DISPATCH_STEPS {
                tracing::error!(
                    ?command,
                    pending = queue.len() + 1,
                    "store: dispatch step limit reached, dropping remaining commands"
                );
                break;
            }
            steps += 1;

            tracing::debug!(step = steps, ?command, "store: applying command");
            let current = Observable::get(&self.state).clone();
            let next = self.reducer.reduce(current, &command);
            Observable::set_if_not_eq(&mut self.state, next);

            if let Some(follow_up) = self.policy.follow_up(&command) {
                queue.push_back(follow_up);
            }
        }
    }

    /// Loads every domain that has a snapshot on disk.
    ///
    /// Domains without a snapshot keep their defaults; a snapshot that fails
    /// to load is reported through [`Store::last_error`].
    pub fn load_existing(&mut self) {
        let codec = SnapshotCodec::new(self.routes.clone());
        for domain in Domain::ALL {
            if codec.exists(domain) {
                self.dispatch(RootCommand::load(domain));
            } else {
                tracing::debug!(%domain, "store: no snapshot, keeping defaults");
            }
        }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &RootState { Observable::get(&self.state) }

    /// The most recent persistence failure, if the last operation failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&OperationError> { self.state().last_error.as_ref() }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> Subscriber<RootState> { Observable::subscribe(&self.state) }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", self.state())
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}
