use crate::config::FormConfig;

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success(String),
    Failure(String),
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success(_))
    }
}

/// Lifecycle of a form: `Idle -> Submitting -> Succeeded | Failed`.
///
/// Terminal states are already armed: a new submit leaves them directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl UiState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, UiState::Submitting)
    }

    pub fn render(&self, config: &FormConfig) -> FormView {
        let submitting = self.is_submitting();
        let panel = match self {
            UiState::Succeeded(text) => Some(PanelView {
                kind: Panel::Success,
                text: text.clone(),
            }),
            UiState::Failed(text) => Some(PanelView {
                kind: Panel::Failure,
                text: text.clone(),
            }),
            UiState::Idle | UiState::Submitting => None,
        };

        FormView {
            control_enabled: !submitting,
            busy: submitting,
            label: if submitting {
                config.busy_label.clone()
            } else {
                config.idle_label.clone()
            },
            panel,
        }
    }
}

impl From<SubmissionResult> for UiState {
    fn from(result: SubmissionResult) -> Self {
        match result {
            SubmissionResult::Success(m) => UiState::Succeeded(m),
            SubmissionResult::Failure(m) => UiState::Failed(m),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub kind: Panel,
    pub text: String,
}

/// Everything the form chrome needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub control_enabled: bool,
    /// Spinner instead of the idle icon.
    pub busy: bool,
    pub label: String,
    pub panel: Option<PanelView>,
}

impl FormView {
    pub fn shows(&self, kind: Panel) -> bool {
        self.panel.as_ref().map(|p| p.kind) == Some(kind)
    }

    pub fn panel_text(&self) -> &str {
        self.panel.as_ref().map(|p| p.text.as_str()).unwrap_or("")
    }
}
