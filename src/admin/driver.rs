//! Runs workflow operations against the API.
//!
//! The panel lock is only held while the workflow changes state, never
//! while a request is in flight.

use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use thiserror::Error;

use super::panel::AdminPanel;
use super::resource::Resource;
use super::workflow::{Outcome, Submission, Ticket};
use crate::api::{ApiCredentials, PortfolioApi};
use crate::common::{ApiError, WorkflowError};

#[derive(Error, Debug)]
pub enum AdminError {
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AdminError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_unauthorized())
    }
}

pub fn lock(panel: &Mutex<AdminPanel>) -> MutexGuard<'_, AdminPanel> {
    panel.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A ticket whose request is still running. Dropping it unfinished (the
/// handler future was cancelled or panicked) abandons the ticket so the
/// workflow does not stay `Loading`.
struct Pending<'a, R: Resource> {
    panel: &'a Mutex<AdminPanel>,
    ticket: Ticket,
    armed: bool,
    _kind: PhantomData<R>,
}

impl<'a, R: Resource> Pending<'a, R> {
    fn new(panel: &'a Mutex<AdminPanel>, ticket: Ticket) -> Self {
        Self {
            panel,
            ticket,
            armed: true,
            _kind: PhantomData,
        }
    }

    /// Hands the ticket back once the response is ready to be applied.
    fn complete(mut self) -> Ticket {
        self.armed = false;
        self.ticket
    }
}

impl<R: Resource> Drop for Pending<'_, R> {
    fn drop(&mut self) {
        if self.armed && R::workflow_mut(&mut lock(self.panel)).abandon(self.ticket) {
            log::warn!("{} request dropped before it finished", R::KIND);
        }
    }
}

async fn complete_fetch<R: Resource>(
    api: &dyn PortfolioApi,
    creds: &ApiCredentials,
    panel: &Mutex<AdminPanel>,
    ticket: Ticket,
) -> Result<(), AdminError> {
    let pending = Pending::<R>::new(panel, ticket);
    let result = R::list(api, creds).await;
    let ticket = pending.complete();

    match result {
        Ok(items) => {
            R::workflow_mut(&mut lock(panel)).finish_fetch(ticket, Ok(items));
            Ok(())
        }
        Err(e) => {
            crate::log_err!(format!("list {}s", R::KIND), e);
            R::workflow_mut(&mut lock(panel)).finish_fetch(ticket, Err(e.user_message()));
            Err(e.into())
        }
    }
}

/// Reloads the whole collection for `R`.
pub async fn refresh<R: Resource>(
    api: &dyn PortfolioApi,
    creds: &ApiCredentials,
    panel: &Mutex<AdminPanel>,
) -> Result<(), AdminError> {
    let ticket = R::workflow_mut(&mut lock(panel)).begin_fetch();
    complete_fetch::<R>(api, creds, panel, ticket).await
}

/// Saves the submitted form (create or update, depending on the open
/// form) and re-reads the collection on success.
pub async fn submit<R: Resource>(
    api: &dyn PortfolioApi,
    creds: &ApiCredentials,
    panel: &Mutex<AdminPanel>,
    form: R::Form,
    today: NaiveDate,
) -> Result<(), AdminError> {
    let (ticket, submission) = R::workflow_mut(&mut lock(panel)).begin_submit(form, today)?;
    let pending = Pending::<R>::new(panel, ticket);

    let result = match &submission {
        Submission::Create(draft) => R::create(api, creds, draft).await,
        Submission::Update { existing, draft } => R::update(api, creds, existing, draft).await,
    };

    let ticket = pending.complete();
    let outcome = R::workflow_mut(&mut lock(panel))
        .finish_submit(ticket, result.as_ref().map(|_| ()).map_err(ApiError::user_message));

    follow_up::<R>(api, creds, panel, "save", outcome, result).await
}

/// Deletes the item with `id` from the current list and re-reads the
/// collection on success.
pub async fn delete<R: Resource>(
    api: &dyn PortfolioApi,
    creds: &ApiCredentials,
    panel: &Mutex<AdminPanel>,
    id: &str,
) -> Result<(), AdminError> {
    let (ticket, item) = R::workflow_mut(&mut lock(panel)).begin_delete(id)?;
    let pending = Pending::<R>::new(panel, ticket);

    let result = R::delete(api, creds, &item).await;

    let ticket = pending.complete();
    let outcome = R::workflow_mut(&mut lock(panel))
        .finish_delete(ticket, result.as_ref().map(|_| ()).map_err(ApiError::user_message));

    follow_up::<R>(api, creds, panel, "delete", outcome, result).await
}

fn failure_context<R: Resource>(action: &str) -> String {
    format!("{action} {}", R::KIND)
}

async fn follow_up<R: Resource>(
    api: &dyn PortfolioApi,
    creds: &ApiCredentials,
    panel: &Mutex<AdminPanel>,
    action: &str,
    outcome: Outcome,
    result: Result<(), ApiError>,
) -> Result<(), AdminError> {
    if let Err(e) = result {
        crate::log_err!(failure_context::<R>(action), e);
        return Err(e.into());
    }

    match outcome {
        Outcome::Refetch(ticket) => complete_fetch::<R>(api, creds, panel, ticket).await,
        Outcome::Stale | Outcome::Failed => Ok(()),
    }
}
