//! Single-flight submission pipeline shared by every form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, registration and book creation all funnel one request at a time
//! through a `SubmissionState` owned by the page. The page disables its submit
//! control while the state is pending; `begin` refusing a second attempt keeps
//! the one-request invariant even if a stale event slips through.
//!
//! LIFECYCLE
//! =========
//! `Idle -> Pending -> Succeeded | Failed`, and any settled phase goes back to
//! `Pending` on the next attempt. Attempts are numbered so a late resolution of
//! an old attempt can never overwrite a newer one. When the page unmounts the
//! signal is disposed, the settle step finds nothing to update, and the outcome
//! is reported as `Abandoned` so no continuation touches a dead view.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::future::Future;

use leptos::prelude::*;

/// Observable phase of one form's submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Submission state owned by exactly one form instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    phase: SubmissionPhase,
    attempt: u64,
}

impl SubmissionState {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == SubmissionPhase::Pending
    }

    pub fn is_error(&self) -> bool {
        self.phase == SubmissionPhase::Failed
    }

    /// Start a new attempt, clearing any previous outcome. Returns `None`
    /// while another attempt is still pending.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_pending() {
            return None;
        }
        self.attempt += 1;
        self.phase = SubmissionPhase::Pending;
        Some(self.attempt)
    }

    /// Record the outcome of `attempt`. Returns `false` and leaves the state
    /// untouched if `attempt` is not the one currently pending.
    pub fn settle(&mut self, attempt: u64, succeeded: bool) -> bool {
        if !self.is_pending() || attempt != self.attempt {
            return false;
        }
        self.phase = if succeeded { SubmissionPhase::Succeeded } else { SubmissionPhase::Failed };
        true
    }
}

/// Storage a pipeline can mutate its state through.
///
/// `None` means the storage is gone (the owning view was disposed).
pub trait SubmissionCell {
    fn with_state<R>(&self, f: impl FnOnce(&mut SubmissionState) -> R) -> Option<R>;
}

impl SubmissionCell for RwSignal<SubmissionState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut SubmissionState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// How one call to [`run`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// Another attempt was pending; no request was issued.
    Skipped,
    Succeeded(T),
    Failed(E),
    /// The request resolved after its view went away.
    Abandoned,
}

/// Drive one attempt: claim the cell, issue `request`, settle the phase.
///
/// `request` is only invoked when the cell accepted a new attempt, so a
/// skipped submission never reaches the network.
pub async fn run<C, T, E, F, Fut>(cell: &C, request: F) -> Outcome<T, E>
where
    C: SubmissionCell,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let Some(attempt) = cell.with_state(SubmissionState::begin).flatten() else {
        return Outcome::Skipped;
    };
    let result = request().await;
    let settled = cell
        .with_state(|state| state.settle(attempt, result.is_ok()))
        .unwrap_or(false);
    if !settled {
        return Outcome::Abandoned;
    }
    match result {
        Ok(value) => Outcome::Succeeded(value),
        Err(error) => Outcome::Failed(error),
    }
}

/// Spawn a prepared attempt on the local executor and hand its outcome to
/// `on_settled`.
pub fn submit<T, E, Fut, S>(attempt: Fut, on_settled: S)
where
    T: 'static,
    E: 'static,
    Fut: Future<Output = Outcome<T, E>> + 'static,
    S: FnOnce(Outcome<T, E>) + 'static,
{
    leptos::task::spawn_local(async move {
        on_settled(attempt.await);
    });
}
