use crate::core::form::FieldId;
use crate::input::policy::CharPolicy;
use crate::input::validators::Validator;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

pub trait Input: Send {
    fn base(&self) -> &InputBase;
    fn base_mut(&mut self) -> &mut InputBase;

    fn id(&self) -> &FieldId {
        &self.base().id
    }

    fn label(&self) -> &str {
        &self.base().label
    }

    /// The field's current value as submitted to validation and the payload.
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);

    /// The value as typed so far; differs from `value()` for inputs that
    /// only produce a value once complete (date segments).
    fn raw_value(&self) -> String {
        self.value()
    }

    fn is_complete(&self) -> bool {
        true
    }

    fn is_focused(&self) -> bool {
        self.base().focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base_mut().focused = focused;
    }

    fn error(&self) -> Option<&str> {
        self.base().error.as_deref()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.base_mut().error = error;
    }

    fn clear_error(&mut self) {
        self.base_mut().error = None;
    }

    fn validators(&self) -> &[Validator] {
        &self.base().validators
    }

    /// Structural check an input performs on itself before field validators
    /// run; only called on non-empty, complete values.
    fn validate_internal(&self) -> Result<(), String> {
        Ok(())
    }

    /// Restores the initial, empty state of the input.
    fn reset(&mut self) {
        self.set_value(String::new());
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    fn render_content(&self, theme: &Theme) -> Vec<Span>;

    /// Column offset of the editing cursor within the rendered content.
    fn cursor_offset_in_content(&self) -> usize;

    /// Whether the terminal cursor should be shown while this input is
    /// focused; selects render their own focus marker instead.
    fn wants_cursor(&self) -> bool {
        true
    }

    fn delete_word(&mut self) {}
    fn delete_word_forward(&mut self) {}
}

pub struct InputBase {
    pub id: FieldId,
    pub label: String,
    pub focused: bool,
    pub error: Option<String>,
    pub validators: Vec<Validator>,
    pub policy: CharPolicy,
    pub min_width: usize,
}

impl InputBase {
    pub fn new(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            focused: false,
            error: None,
            validators: Vec::new(),
            policy: CharPolicy::Free,
            min_width: 1,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn with_policy(mut self, policy: CharPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }
}
