use chrono::NaiveDate;

use super::resource::Resource;
use crate::common::WorkflowError;

/// Where a resource's admin screen currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    ViewingList,
    Loading,
    Error(String),
    Editing,
}

/// Create vs. update, decided by whether an item is being edited.
#[derive(Debug, Clone, PartialEq)]
pub enum EditMode<R> {
    Create,
    Update(R),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Fetch,
    Submit,
    Delete,
}

/// Handle for one in-flight request. Finishing with a ticket that is no
/// longer current is a no-op, which is how superseded or detached
/// responses are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Ticket {
    epoch: u64,
    op: Operation,
}

/// What the caller has to do after finishing a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The response arrived for a superseded request and was ignored.
    Stale,
    /// The mutation failed; the error is now the workflow state.
    Failed,
    /// The mutation succeeded; run the fetch this ticket belongs to.
    Refetch(Ticket),
}

#[derive(Debug, Clone)]
pub enum Submission<R: Resource> {
    Create(R::Draft),
    Update { existing: R, draft: R::Draft },
}

/// List/form state machine for one resource kind.
///
/// The workflow never performs I/O: `begin_*` moves it to `Loading` and
/// hands out a [`Ticket`], the caller runs the request, and `finish_*`
/// applies the response.
#[derive(Debug, Clone)]
pub struct CrudWorkflow<R: Resource> {
    state: WorkflowState,
    items: Vec<R>,
    form: R::Form,
    mode: Option<EditMode<R>>,
    success: Option<String>,
    epoch: u64,
    in_flight: Option<Operation>,
    loaded: bool,
}

impl<R: Resource> Default for CrudWorkflow<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> CrudWorkflow<R> {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::ViewingList,
            items: Vec::new(),
            form: R::Form::default(),
            mode: None,
            success: None,
            epoch: 0,
            in_flight: None,
            loaded: false,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn form(&self) -> &R::Form {
        &self.form
    }

    pub fn editing_item(&self) -> Option<&R> {
        match &self.mode {
            Some(EditMode::Update(item)) => Some(item),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.state == WorkflowState::Loading
    }

    /// Whether at least one fetch has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            WorkflowState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn issue(&mut self, op: Operation) -> Ticket {
        self.epoch += 1;
        self.in_flight = Some(op);
        self.state = WorkflowState::Loading;
        Ticket {
            epoch: self.epoch,
            op,
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.epoch == self.epoch && self.in_flight == Some(ticket.op)
    }

    fn settle(&mut self) {
        self.in_flight = None;
        self.state = if self.mode.is_some() {
            WorkflowState::Editing
        } else {
            WorkflowState::ViewingList
        };
    }

    /// Starts loading the full collection. Supersedes any request in
    /// flight. An open form stays open.
    pub fn begin_fetch(&mut self) -> Ticket {
        self.issue(Operation::Fetch)
    }

    /// Replaces the list wholesale on success. Returns whether the
    /// response was applied.
    pub fn finish_fetch(&mut self, ticket: Ticket, result: Result<Vec<R>, String>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("dropping stale {} list response", R::KIND);
            return false;
        }

        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.settle();
            }
            Err(msg) => {
                self.in_flight = None;
                self.state = WorkflowState::Error(msg);
            }
        }
        true
    }

    fn ensure_idle(&self) -> Result<(), WorkflowError> {
        if self.is_loading() {
            Err(WorkflowError::Busy)
        } else {
            Ok(())
        }
    }

    /// Opens an empty form for a new item.
    pub fn start_create(&mut self) -> Result<(), WorkflowError> {
        self.ensure_idle()?;
        self.form = R::Form::default();
        self.mode = Some(EditMode::Create);
        self.success = None;
        self.state = WorkflowState::Editing;
        Ok(())
    }

    /// Opens the form pre-filled from an item of the current list.
    pub fn start_edit(&mut self, id: &str) -> Result<(), WorkflowError> {
        self.ensure_idle()?;
        let item = self
            .find(id)
            .cloned()
            .ok_or_else(|| WorkflowError::NotFound(format!("{} {}", R::KIND, id)))?;

        self.form = R::Form::from(&item);
        self.mode = Some(EditMode::Update(item));
        self.success = None;
        self.state = WorkflowState::Editing;
        Ok(())
    }

    /// Clears the form and returns to the list.
    pub fn cancel(&mut self) {
        self.form = R::Form::default();
        self.mode = None;
        if self.in_flight.is_none() {
            self.state = WorkflowState::ViewingList;
        }
    }

    /// Takes the submitted form values and builds the request. The form is
    /// kept until the outcome is known, so a failed save can be retried.
    pub fn begin_submit(
        &mut self,
        form: R::Form,
        today: NaiveDate,
    ) -> Result<(Ticket, Submission<R>), WorkflowError> {
        self.ensure_idle()?;
        let mode = self.mode.clone().ok_or(WorkflowError::NotEditing)?;

        self.form = form;
        let submission = match mode {
            EditMode::Create => Submission::Create(R::draft(&self.form, None, today)),
            EditMode::Update(existing) => {
                let draft = R::draft(&self.form, Some(&existing), today);
                Submission::Update { existing, draft }
            }
        };

        self.success = None;
        Ok((self.issue(Operation::Submit), submission))
    }

    pub fn finish_submit(&mut self, ticket: Ticket, result: Result<(), String>) -> Outcome {
        if !self.is_current(ticket) {
            return Outcome::Stale;
        }

        match result {
            Ok(()) => {
                let message = match self.mode {
                    Some(EditMode::Update(_)) => R::updated_message(),
                    _ => R::created_message(),
                };
                self.success = Some(message.to_string());
                self.form = R::Form::default();
                self.mode = None;
                Outcome::Refetch(self.begin_fetch())
            }
            Err(msg) => {
                self.in_flight = None;
                self.state = WorkflowState::Error(msg);
                Outcome::Failed
            }
        }
    }

    /// Starts deleting an item of the current list.
    pub fn begin_delete(&mut self, id: &str) -> Result<(Ticket, R), WorkflowError> {
        self.ensure_idle()?;
        let item = self
            .find(id)
            .cloned()
            .ok_or_else(|| WorkflowError::NotFound(format!("{} {}", R::KIND, id)))?;

        self.success = None;
        Ok((self.issue(Operation::Delete), item))
    }

    pub fn finish_delete(&mut self, ticket: Ticket, result: Result<(), String>) -> Outcome {
        if !self.is_current(ticket) {
            return Outcome::Stale;
        }

        match result {
            Ok(()) => {
                self.success = Some(R::deleted_message().to_string());
                Outcome::Refetch(self.begin_fetch())
            }
            Err(msg) => {
                self.in_flight = None;
                self.state = WorkflowState::Error(msg);
                Outcome::Failed
            }
        }
    }

    /// Gives up on a request that will never report back. An open form
    /// stays open so the admin can resubmit it. Returns whether the ticket
    /// was still current.
    pub fn abandon(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        log::debug!("abandoning {:?} of {}s", ticket.op, R::KIND);
        self.settle();
        true
    }

    /// Forgets every request in flight, as when the screen is left. Their
    /// responses will be discarded when they arrive.
    pub fn detach(&mut self) {
        self.epoch += 1;
        if self.in_flight.take().is_some() {
            self.settle();
        }
    }
}
