use std::path::Path;

use log::{debug, info, warn};
use tokio::sync::watch;

use crate::{
    error::{ClientError, ClientResult},
    image::ImageFile,
    services::handler::ModerationService,
    session::dto::{Action, SessionInput, ViewState},
};

/// Pure transition function for the session view.
pub fn reduce(state: ViewState, action: Action) -> ViewState {
    match (state, action) {
        // Starting while already pending is a no-op.
        (ViewState::Pending, Action::SubmitStarted) => ViewState::Pending,
        (_, Action::SubmitStarted) => ViewState::Pending,
        (_, Action::Succeeded(result)) => ViewState::Displaying(result),
        (_, Action::Failed(message)) => ViewState::Errored(message),
        (ViewState::Errored(_), Action::FileSelected) => ViewState::Idle,
        (state, Action::FileSelected) => state,
        (ViewState::Pending, Action::Cancelled) => ViewState::Idle,
        (state, Action::Cancelled) => state,
    }
}

fn dispatch(view: &watch::Sender<ViewState>, action: Action) {
    view.send_modify(|state| *state = reduce(std::mem::take(state), action));
}

/// Holds the session in `Pending` for one request.
///
/// Dropping the guard without `settle` (the submit future was dropped mid-request)
/// cancels the pending state so the session can submit again.
struct PendingGuard<'a> {
    view: &'a watch::Sender<ViewState>,
    settled: bool,
}

impl<'a> PendingGuard<'a> {
    fn start(view: &'a watch::Sender<ViewState>) -> Option<Self> {
        let started = view.send_if_modified(|state| {
            if state.is_pending() {
                return false;
            }
            *state = reduce(std::mem::take(state), Action::SubmitStarted);
            true
        });

        started.then_some(Self {
            view,
            settled: false,
        })
    }

    fn settle(mut self, action: Action) {
        dispatch(self.view, action);
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Submission dropped before the service answered");
            dispatch(self.view, Action::Cancelled);
        }
    }
}

pub struct Session {
    input: SessionInput,
    view: watch::Sender<ViewState>,
    service: ModerationService,
}

impl Session {
    pub fn new(service: ModerationService) -> Self {
        let (view, _) = watch::channel(ViewState::default());

        Self {
            input: SessionInput::default(),
            view,
            service,
        }
    }

    pub fn input(&self) -> &SessionInput {
        &self.input
    }

    pub fn view(&self) -> ViewState {
        self.view.borrow().clone()
    }

    /// Receiver that sees every view transition, including `Pending`.
    pub fn watch(&self) -> watch::Receiver<ViewState> {
        self.view.subscribe()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.input.token = token.into();
    }

    pub fn select_file(&mut self, image: ImageFile) {
        debug!("File selected: {}", image.name());
        self.input.file = Some(image);
        dispatch(&self.view, Action::FileSelected);
    }

    /// Reads and selects an image from disk. A rejected file leaves the selection unchanged.
    pub async fn select_path(&mut self, path: impl AsRef<Path>) -> ClientResult<()> {
        let image = ImageFile::from_path(path).await?;
        self.select_file(image);
        Ok(())
    }

    pub fn submit_enabled(&self) -> bool {
        !self.view.borrow().is_pending() && self.input.has_token() && self.input.has_file()
    }

    /// Runs one submission attempt and returns the resulting view.
    ///
    /// While a request is in flight further calls make no request and return `Pending`.
    pub async fn submit(&self) -> ViewState {
        if self.view.borrow().is_pending() {
            warn!("Submit ignored: a request is already in flight");
            return self.view();
        }

        let image = match self.validate() {
            Ok(image) => image,
            Err(e) => {
                info!("Submission rejected locally: {}", e);
                dispatch(&self.view, Action::Failed(e.display_message()));
                return self.view();
            }
        };

        let Some(guard) = PendingGuard::start(&self.view) else {
            return self.view();
        };

        let action = match self.service.moderate(&self.input.token, &image).await {
            Ok(result) => Action::Succeeded(result),
            Err(e) => Action::Failed(e.display_message()),
        };
        guard.settle(action);

        self.view()
    }

    fn validate(&self) -> ClientResult<ImageFile> {
        if !self.input.has_token() {
            return Err(ClientError::MissingToken);
        }
        self.input.file.clone().ok_or(ClientError::MissingFile)
    }
}
