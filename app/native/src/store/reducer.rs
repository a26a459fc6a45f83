//! Reducer composition.
//!
//! A [`Reducer`] maps `(state, command)` to a new state. Small reducers written
//! against one domain are lifted into the root with a [`Pullback`] and unioned
//! with [`Combine`]:
//!
//! ```text
//!   WindowLayoutState ──┐                        ┌── RootState
//!   HotkeyState ────────┼── Pullback (lens/prism)┼── RootState ── Combine ── RootState
//!   AnimationState ─────┘                        └── RootState
//! ```
//!
//! The lens says where the child state lives inside the parent; the prism
//! says which parent commands carry a child command.

use std::fmt;
use std::marker::PhantomData;

/// Transforms a state in response to a command.
pub trait Reducer<S, C> {
    /// Applies `command` to `state`. Must be total and perform no I/O other
    /// than what the reducer is explicitly built to do.
    fn reduce(&self, state: S, command: &C) -> S;

    /// Returns true if this reducer handles `command`.
    fn accepts(&self, _command: &C) -> bool { true }
}

impl<S, C> Reducer<S, C> for Box<dyn Reducer<S, C>> {
    fn reduce(&self, state: S, command: &C) -> S { (**self).reduce(state, command) }

    fn accepts(&self, command: &C) -> bool { (**self).accepts(command) }
}

/// Adapts a plain `fn(S, &C) -> S` into a [`Reducer`] that accepts every command.
pub struct FnReducer<S, C>(pub fn(S, &C) -> S);

impl<S, C> Reducer<S, C> for FnReducer<S, C> {
    fn reduce(&self, state: S, command: &C) -> S { (self.0)(state, command) }
}

impl<S, C> Clone for FnReducer<S, C> {
    fn clone(&self) -> Self { *self }
}

impl<S, C> Copy for FnReducer<S, C> {}

impl<S, C> fmt::Debug for FnReducer<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("FnReducer") }
}

/// Focuses a parent state `P` onto a child state `S`.
///
/// `inject(p, project(&p).clone()) == p` must hold.
pub struct StateLens<P, S> {
    pub project: fn(&P) -> &S,
    pub inject: fn(P, S) -> P,
}

impl<P, S> Clone for StateLens<P, S> {
    fn clone(&self) -> Self { *self }
}

impl<P, S> Copy for StateLens<P, S> {}

/// Relates a parent command `P` to a child command `C`.
///
/// `try_extract(&embed(c)) == Some(&c)` must hold.
pub struct CommandPrism<P, C> {
    pub embed: fn(C) -> P,
    pub try_extract: fn(&P) -> Option<&C>,
}

impl<P, C> Clone for CommandPrism<P, C> {
    fn clone(&self) -> Self { *self }
}

impl<P, C> Copy for CommandPrism<P, C> {}

/// Lifts a child reducer into a parent state and command space.
///
/// Parent commands the prism cannot extract pass through untouched.
pub struct Pullback<R, PS, PC, S, C> {
    child: R,
    lens: StateLens<PS, S>,
    prism: CommandPrism<PC, C>,
    _marker: PhantomData<fn(S, &C)>,
}

impl<R, PS, PC, S, C> Pullback<R, PS, PC, S, C>
where
    R: Reducer<S, C>,
{
    /// Creates a pullback of `child` along `lens` and `prism`.
    pub const fn new(child: R, lens: StateLens<PS, S>, prism: CommandPrism<PC, C>) -> Self {
        Self { child, lens, prism, _marker: PhantomData }
    }
}

impl<R, PS, PC, S, C> Reducer<PS, PC> for Pullback<R, PS, PC, S, C>
where
    R: Reducer<S, C>,
    S: Clone,
{
    fn reduce(&self, state: PS, command: &PC) -> PS {
        let Some(child_command) = (self.prism.try_extract)(command) else {
            return state;
        };

        let child_state = (self.lens.project)(&state).clone();
        let next = self.child.reduce(child_state, child_command);
        (self.lens.inject)(state, next)
    }

    fn accepts(&self, command: &PC) -> bool {
        (self.prism.try_extract)(command).is_some_and(|c| self.child.accepts(c))
    }
}

/// Unions reducers over the same state and command space.
///
/// Reducers are tried in the order they were added; the first that accepts a
/// command handles it. Commands nobody accepts leave the state unchanged.
pub struct Combine<S, C> {
    reducers: Vec<(&'static str, Box<dyn Reducer<S, C>>)>,
}

impl<S, C> Default for Combine<S, C> {
    fn default() -> Self { Self { reducers: Vec::new() } }
}

impl<S, C> Combine<S, C> {
    /// Creates an empty combination.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Appends a named reducer.
    #[must_use]
    pub fn with(mut self, name: &'static str, reducer: impl Reducer<S, C> + 'static) -> Self {
        self.reducers.push((name, Box::new(reducer)));
        self
    }

    /// Number of reducers in the combination.
    #[must_use]
    pub fn len(&self) -> usize { self.reducers.len() }

    /// Returns true if no reducer has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.reducers.is_empty() }
}

impl<S, C: fmt::Debug> Reducer<S, C> for Combine<S, C> {
    fn reduce(&self, state: S, command: &C) -> S {
        let mut accepting = self.reducers.iter().filter(|(_, r)| r.accepts(command));

        let Some((name, handler)) = accepting.next() else {
            tracing::debug!(?command, "store: no reducer accepts command");
            return state;
        };

        for (other, _) in accepting {
            tracing::error!(
                ?command,
                handled_by = name,
                ignored = other,
                "store: command accepted by more than one reducer"
            );
        }

        handler.reduce(state, command)
    }

    fn accepts(&self, command: &C) -> bool {
        self.reducers.iter().any(|(_, r)| r.accepts(command))
    }
}
