// ABOUTME: Application state store and transitions for the quote widget
// All mutation is synchronous inside event handlers; the loop redraws after every event

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::api::client::QuoteApiClient;
use crate::api::error::ApiError;
use crate::api::types::{LeadSubmission, OrgConfig};
use crate::components::wizard::state::{WizardState, WizardStep};
use crate::models::Quote;
use crate::pricing;

/// Async work requested by a state transition. The event loop takes the
/// pending action, spawns it, and delivers the completion back as a message.
#[derive(Debug, Clone)]
pub enum AsyncAction {
    /// Fetch organization configuration (startup)
    FetchConfig,
    /// Submit the completed lead
    SubmitLead(LeadSubmission),
}

/// The single mutable state record behind the widget
#[derive(Debug)]
pub struct AppState {
    /// Organization the widget is configured for
    pub org_id: String,
    /// Attribution URL recorded in the lead payload
    pub source_url: String,
    /// Loaded configuration; None until the startup fetch completes
    pub config: Option<OrgConfig>,
    /// Set when the startup fetch has failed for good; blocking screen
    pub config_failed: bool,
    pub wizard: WizardState,
    /// Computed on every property-details → quote transition, read after
    pub quote: Option<Quote>,
    /// True while either network operation is in flight. Doubles as the
    /// guard against duplicate concurrent submissions.
    pub is_loading: bool,
    /// Human-readable message for the current failure, inline or blocking
    pub error: Option<String>,
    pub pending_async_action: Option<AsyncAction>,
    pub should_quit: bool,
}

impl AppState {
    /// Initial state: config fetch already requested, loading screen up
    pub fn new(org_id: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            source_url: source_url.into(),
            config: None,
            config_failed: false,
            wizard: WizardState::new(),
            quote: None,
            is_loading: true,
            error: None,
            pending_async_action: Some(AsyncAction::FetchConfig),
            should_quit: false,
        }
    }

    /// Whether the wizard is interactive (config loaded, nothing blocking)
    pub fn is_ready(&self) -> bool {
        self.config.is_some() && !self.config_failed
    }

    /// Select the highlighted service card: records the service and moves to
    /// property details. No-op outside the service-select step.
    pub fn select_service(&mut self) {
        if self.wizard.step != WizardStep::ServiceSelect {
            return;
        }
        let Some(config) = &self.config else {
            return;
        };
        let Some(service) = config.services.get(self.wizard.selected_service_index) else {
            return;
        };

        let (id, name) = (service.id.clone(), service.name.clone());
        info!(service_id = %id, "service selected");
        self.wizard.choose_service(&id, &name);
        self.error = None;
    }

    /// Move the service-card highlight
    pub fn move_service_selection(&mut self, down: bool) {
        let Some(config) = &self.config else {
            return;
        };
        let count = config.services.len();
        if count == 0 {
            return;
        }

        let idx = self.wizard.selected_service_index;
        self.wizard.selected_service_index = if down {
            (idx + 1) % count
        } else {
            (idx + count - 1) % count
        };
    }

    /// Move the extras highlight on the property-details step
    pub fn move_extras_cursor(&mut self, down: bool) {
        let Some(config) = &self.config else {
            return;
        };
        let count = config.extras.len();
        if count == 0 {
            return;
        }

        let idx = self.wizard.extras_cursor;
        self.wizard.extras_cursor = if down {
            (idx + 1) % count
        } else {
            (idx + count - 1) % count
        };
    }

    /// Toggle the highlighted extra in the selection set
    pub fn toggle_highlighted_extra(&mut self) {
        let Some(config) = &self.config else {
            return;
        };
        if let Some(label) = config.extras.get(self.wizard.extras_cursor) {
            let label = label.clone();
            self.wizard.form.toggle_extra(&label);
        }
    }

    /// Advance from property details: validates the address, computes the
    /// quote, and moves to the quote step. The quote is recomputed on every
    /// pass through this transition, including after navigating back, so a
    /// re-entered step never carries a stale quote forward.
    pub fn advance_from_details(&mut self) {
        if self.wizard.step != WizardStep::PropertyDetails {
            return;
        }

        if let Err(message) = self.wizard.validate_details() {
            warn!(error = %message, "property details validation failed");
            self.error = Some(message);
            return;
        }

        let Some(config) = &self.config else {
            return;
        };

        self.quote = Some(pricing::compute_quote(&self.wizard.form, config));
        self.wizard.step = WizardStep::QuoteContact;
        self.error = None;
    }

    /// Go back one step, keeping all entered data. The quote, if any, is left
    /// in place but will be recomputed when the details step is re-completed.
    pub fn go_back(&mut self) {
        if self.wizard.go_back() {
            self.error = None;
        }
    }

    /// Submit the lead: validates contact fields and requests the async POST.
    /// The `is_loading` guard drops repeated presses while a submission is in
    /// flight.
    pub fn submit(&mut self) {
        if self.wizard.step != WizardStep::QuoteContact || self.is_loading {
            return;
        }

        if let Err(message) = self.wizard.validate_contact() {
            warn!(error = %message, "contact validation failed");
            self.error = Some(message);
            return;
        }

        let Some(quote) = &self.quote else {
            return;
        };

        let lead = LeadSubmission::from_parts(&self.wizard.form, quote, &self.source_url);
        self.is_loading = true;
        self.error = None;
        self.pending_async_action = Some(AsyncAction::SubmitLead(lead));
    }

    /// Apply the config fetch completion. Failure is terminal for the run:
    /// blocking message, no automatic retry beyond the client's own policy.
    pub fn apply_config_result(&mut self, result: Result<OrgConfig, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(config) => {
                info!(business = %config.business_name, "configuration loaded");
                self.config = Some(config);
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "configuration load failed");
                self.config_failed = true;
                self.error = Some("Unable to load the quote widget. Please try again later.".to_string());
            }
        }
    }

    /// Apply the submission completion: success reaches the terminal step,
    /// failure stays on the contact step with an inline message so the user
    /// can resubmit.
    pub fn apply_submit_result(&mut self, result: Result<(), ApiError>) {
        self.is_loading = false;
        match result {
            Ok(()) => {
                self.wizard.step = WizardStep::Success;
                self.error = None;
            }
            Err(ApiError::Api(message)) => {
                warn!(error = %message, "submission rejected by API");
                self.error = Some(message);
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                self.error = Some("Something went wrong sending your request. Please try again.".to_string());
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Completion of an async operation, delivered back to the event loop. The
/// loop applies these as ordinary synchronous state mutations, so no render
/// can ever observe a half-applied completion.
#[derive(Debug)]
pub enum AppMessage {
    ConfigLoaded(Result<OrgConfig, ApiError>),
    SubmissionFinished(Result<(), ApiError>),
}

/// The running application: state store plus the API client and the channel
/// async completions come back on.
pub struct App {
    pub state: AppState,
    client: QuoteApiClient,
    tx: mpsc::UnboundedSender<AppMessage>,
    rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl App {
    pub fn new(org_id: &str, source_url: &str, endpoint: &str) -> Result<Self, ApiError> {
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            state: AppState::new(org_id, source_url),
            client: QuoteApiClient::new(endpoint)?,
            tx,
            rx,
        })
    }

    /// Spawn any async work a state transition has requested. Completions
    /// come back as messages; a dropped receiver only means the widget quit
    /// first, so send failures are ignored.
    pub fn process_pending_action(&mut self) {
        let Some(action) = self.state.pending_async_action.take() else {
            return;
        };

        match action {
            AsyncAction::FetchConfig => {
                let client = self.client.clone();
                let org_id = self.state.org_id.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = client.fetch_config(&org_id).await;
                    let _ = tx.send(AppMessage::ConfigLoaded(result));
                });
            }
            AsyncAction::SubmitLead(lead) => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = client.submit_lead(&lead).await;
                    let _ = tx.send(AppMessage::SubmissionFinished(result));
                });
            }
        }
    }

    /// Apply every completion that has arrived since the last frame
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            match message {
                AppMessage::ConfigLoaded(result) => self.state.apply_config_result(result),
                AppMessage::SubmissionFinished(result) => self.state.apply_submit_result(result),
            }
        }
    }
}
