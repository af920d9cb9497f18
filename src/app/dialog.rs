/// Blocking yes/no confirmation, asked before any record is deleted.
///
/// The front-end decides the surface (terminal prompt, modal, ...); the
/// runtime only cares about the answer. A `false` cancels the operation
/// with no state change.
pub trait ConfirmDialog {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Answers yes to everything. Handy for non-interactive use.
#[derive(Debug, Default)]
pub struct AlwaysConfirm;

impl ConfirmDialog for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
