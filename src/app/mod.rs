//! The application container: state, storage handles, the confirmation
//! seam, and the timer wheel, tied together by `dispatch`/`tick`.

pub mod dialog;
pub mod state;
pub mod store;


pub use dialog::{AlwaysConfirm, ConfirmDialog};
pub use state::AppState;
pub use store::{Action, AsyncAction, ContactAction, TimerAction, TodoAction};

use std::sync::Arc;
use std::time::Instant;

use crate::domain::IdGenerator;
use crate::infra::repository::{MessageRepository, TodoRepository};
use crate::infra::storage::KeyValueStorage;
use crate::render::{self, ViewModel};
use crate::schedule::{Debouncer, Scheduler};
use state::{DomainState, UiState};
use store::DebounceChannel;

pub struct App {
    pub state: AppState,
    message_repo: MessageRepository,
    todo_repo: TodoRepository,
    dialog: Box<dyn ConfirmDialog>,
    scheduler: Scheduler<TimerAction>,
    debouncer: Debouncer<DebounceChannel>,
}

impl App {
    /// Load both record lists from storage and start with a clean UI.
    /// Unreadable data has already degraded to an empty list inside the
    /// repositories.
    pub fn new(storage: Arc<dyn KeyValueStorage>, dialog: Box<dyn ConfirmDialog>) -> Self {
        let message_repo = MessageRepository::new(storage.clone());
        let todo_repo = TodoRepository::new(storage);

        let messages = message_repo.load();
        let todos = todo_repo.load();
        let last_id = messages
            .iter()
            .map(|message| message.id)
            .chain(todos.iter().map(|todo| todo.id))
            .max()
            .unwrap_or(0);

        Self {
            state: AppState {
                domain: DomainState {
                    messages,
                    todos,
                    ids: IdGenerator::from_last(last_id),
                },
                ui: UiState::default(),
            },
            message_repo,
            todo_repo,
            dialog,
            scheduler: Scheduler::new(),
            debouncer: Debouncer::new(),
        }
    }

    /// Fire every timer that came due and route its task through the
    /// reducer. The front-end calls this before each render.
    pub fn tick(&mut self, now: Instant) {
        for task in self.scheduler.fire_due(now) {
            self.dispatch(Action::Timer(task), now);
        }
    }

    /// Derive the full display tree from current state.
    pub fn view(&self) -> ViewModel {
        render::render(&self.state)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn timers_idle(&self) -> bool {
        self.scheduler.is_idle()
    }
}
