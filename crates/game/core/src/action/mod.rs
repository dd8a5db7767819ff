//! Actions and the single dispatch step that commits them to a board.
//!
//! An [`Action`] is only a proposal. [`apply_action`] re-checks it against the
//! board it is about to mutate, so an action planned on a scratch copy can be
//! replayed on live state without ever committing a stale decision.
mod dispatch;
mod types;

pub use dispatch::{ApplyOutcome, apply_action, apply_command};
pub use types::{Action, ActionCommand};
