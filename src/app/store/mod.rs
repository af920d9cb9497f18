//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, AsyncAction, ContactAction, TimerAction, TodoAction};
pub use command::{
    COMPLETING_FLASH, CONTACT_FIELD_QUIET, Command, DebounceChannel, DeleteTarget,
    SUCCESS_NOTICE_TTL, TODO_SEARCH_QUIET,
};

use std::time::Instant;

use super::App;

impl App {
    /// Route one user event through the reducer, then execute every side
    /// effect it emitted. Persistence and confirmation complete before this
    /// returns, so the store and its mirror are consistent (or the failure
    /// has been surfaced) by the time the caller re-renders.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command, now);
        }
    }
}
