//! Step-by-step wizard state and local validation.
//!
//! The wizard walks `Details → Tools → Review`. Moving forward validates the
//! step being left; moving back never does. Submission itself lives in
//! [`crate::submission`].

use std::fmt;

use crate::models::ProjectAnswers;

/// Ordered wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Details,
    Tools,
    Review,
}

impl WizardStep {
    /// Steps in order.
    pub const ALL: [WizardStep; 3] = [WizardStep::Details, WizardStep::Tools, WizardStep::Review];

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Details => "Project details",
            WizardStep::Tools => "Connect tools",
            WizardStep::Review => "Review & generate",
        }
    }

    /// Zero-based position.
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// A single field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validates the details step: name, description, team size.
pub fn validate_details(answers: &ProjectAnswers) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if answers.project_name.trim().is_empty() {
        errors.push(FieldError {
            field: "projectName",
            message: "Project name is required.",
        });
    }
    if answers.description.trim().is_empty() {
        errors.push(FieldError {
            field: "description",
            message: "Share a short summary so we can configure templates.",
        });
    }
    if answers.team_size.is_empty() {
        errors.push(FieldError {
            field: "teamSize",
            message: "Enter your current team size.",
        });
    } else if answers.team_size.count().is_none() {
        errors.push(FieldError {
            field: "teamSize",
            message: "Provide a whole number greater than zero.",
        });
    }
    errors
}

/// Validates the tools step: at least one tool selected.
pub fn validate_tools(answers: &ProjectAnswers) -> Vec<FieldError> {
    if answers.tools.is_empty() {
        vec![FieldError {
            field: "tools",
            message: "Select at least one tool to continue.",
        }]
    } else {
        Vec::new()
    }
}

/// Adds `tool_id` to the selection, or removes it if already selected.
pub fn toggle_tool(selection: &[String], tool_id: &str) -> Vec<String> {
    if selection.iter().any(|id| id == tool_id) {
        selection
            .iter()
            .filter(|id| *id != tool_id)
            .cloned()
            .collect()
    } else {
        let mut next = selection.to_vec();
        next.push(tool_id.to_string());
        next
    }
}

/// Wizard session: the answers collected so far and the current step.
#[derive(Debug, Clone)]
pub struct Wizard {
    answers: ProjectAnswers,
    step: WizardStep,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(ProjectAnswers::wizard_defaults())
    }
}

impl Wizard {
    pub fn new(answers: ProjectAnswers) -> Self {
        Self {
            answers,
            step: WizardStep::Details,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &ProjectAnswers {
        &self.answers
    }

    pub fn answers_mut(&mut self) -> &mut ProjectAnswers {
        &mut self.answers
    }

    pub fn into_answers(self) -> ProjectAnswers {
        self.answers
    }

    /// Toggles a tool in the current selection.
    pub fn toggle_tool(&mut self, tool_id: &str) {
        self.answers.tools = toggle_tool(&self.answers.tools, tool_id);
    }

    /// Validation errors for `step` against the current answers.
    pub fn errors_for(&self, step: WizardStep) -> Vec<FieldError> {
        match step {
            WizardStep::Details => validate_details(&self.answers),
            WizardStep::Tools => validate_tools(&self.answers),
            WizardStep::Review => Vec::new(),
        }
    }

    /// Validation errors across every step, in step order.
    pub fn validate_all(&self) -> Vec<FieldError> {
        WizardStep::ALL
            .iter()
            .flat_map(|step| self.errors_for(*step))
            .collect()
    }

    /// Moves to the next step if the current one validates.
    ///
    /// # Errors
    ///
    /// Returns the current step's field errors and stays put.
    pub fn advance(&mut self) -> Result<WizardStep, Vec<FieldError>> {
        let errors = self.errors_for(self.step);
        if !errors.is_empty() {
            return Err(errors);
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Moves to the previous step without validating.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Jumps directly to `step`; jumping forward validates every step
    /// skipped over.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's errors and stays put.
    pub fn go_to(&mut self, step: WizardStep) -> Result<WizardStep, Vec<FieldError>> {
        for skipped in WizardStep::ALL
            .iter()
            .filter(|s| **s >= self.step && **s < step)
        {
            let errors = self.errors_for(*skipped);
            if !errors.is_empty() {
                return Err(errors);
            }
        }
        self.step = step;
        Ok(step)
    }
}
