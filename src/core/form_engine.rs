use crate::core::form::{FieldErrors, FieldId};
use crate::core::form_event::FormEvent;
use crate::core::validation;
use crate::input::{Input, KeyResult};
use crate::terminal::KeyEvent;

/// Focus and key routing over a form's field list. The fields themselves
/// live on the form; every method borrows them for the duration of the
/// operation.
pub struct FormEngine {
    focus_index: Option<usize>,
}

impl FormEngine {
    pub fn new(fields: &mut [Box<dyn Input>]) -> Self {
        let mut engine = Self { focus_index: None };
        if !fields.is_empty() {
            engine.set_focus_internal(fields, Some(0));
        }
        engine
    }

    pub fn reset(&mut self, fields: &mut [Box<dyn Input>]) {
        self.focus_index = None;
        if !fields.is_empty() {
            self.set_focus_internal(fields, Some(0));
        }
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    pub fn focused_id(&self, fields: &[Box<dyn Input>]) -> Option<FieldId> {
        self.focus_index
            .and_then(|i| fields.get(i))
            .map(|f| f.id().clone())
    }

    pub fn move_focus(&mut self, fields: &mut [Box<dyn Input>], direction: isize) -> Vec<FormEvent> {
        if fields.is_empty() {
            return vec![];
        }

        let current = self.focus_index.unwrap_or(0);
        let len = fields.len() as isize;
        let next = ((current as isize + direction + len) % len) as usize;

        let mut events = Vec::new();
        self.set_focus(fields, Some(next), &mut events);
        events
    }

    pub fn set_focus(
        &mut self,
        fields: &mut [Box<dyn Input>],
        new_index: Option<usize>,
        events: &mut Vec<FormEvent>,
    ) {
        let from_id = self.focused_id(fields);
        let to_id = new_index
            .and_then(|i| fields.get(i))
            .map(|f| f.id().clone());

        if from_id == to_id {
            return;
        }

        self.set_focus_internal(fields, new_index);
        events.push(FormEvent::FocusChanged {
            from: from_id,
            to: to_id,
        });
    }

    /// Moves focus one field forward; false when already on the last field.
    pub fn advance_focus(
        &mut self,
        fields: &mut [Box<dyn Input>],
        events: &mut Vec<FormEvent>,
    ) -> bool {
        let Some(current) = self.focus_index else {
            return false;
        };

        let next = current + 1;
        if next < fields.len() {
            self.set_focus(fields, Some(next), events);
            true
        } else {
            false
        }
    }

    pub fn handle_key(&mut self, fields: &mut [Box<dyn Input>], key: KeyEvent) -> Vec<FormEvent> {
        self.update_focused_input(fields, |input| {
            Some(input.handle_key(key.code, key.modifiers))
        })
    }

    pub fn handle_delete_word(
        &mut self,
        fields: &mut [Box<dyn Input>],
        forward: bool,
    ) -> Vec<FormEvent> {
        self.update_focused_input(fields, |input| {
            if forward {
                input.delete_word_forward();
            } else {
                input.delete_word();
            }
            None
        })
    }

    /// Validates only the focused field, pushing or clearing its inline
    /// error.
    pub fn validate_focused(
        &self,
        fields: &mut [Box<dyn Input>],
    ) -> Result<(), (FieldId, String)> {
        let Some(input) = self.focus_index.and_then(|i| fields.get_mut(i)) else {
            return Ok(());
        };

        match validation::validate_input(input.as_ref()) {
            Ok(()) => {
                input.clear_error();
                Ok(())
            }
            Err(err) => {
                let id = input.id().clone();
                input.set_error(Some(err.clone()));
                Err((id, err))
            }
        }
    }

    /// Pushes submit-time errors onto the matching widgets, clearing the
    /// rest; returns the ids that received an error.
    pub fn apply_errors(
        &mut self,
        fields: &mut [Box<dyn Input>],
        errors: &FieldErrors,
    ) -> Vec<FieldId> {
        let mut applied = Vec::new();

        for field in fields.iter_mut() {
            if let Some(err) = errors.get(field.id().as_str()) {
                field.set_error(Some(err.clone()));
                applied.push(field.id().clone());
            } else {
                field.clear_error();
            }
        }

        applied
    }

    pub fn clear_error(&self, fields: &mut [Box<dyn Input>], id: &str) {
        if let Some(field) = fields.iter_mut().find(|f| f.id() == id) {
            field.clear_error();
        }
    }

    fn set_focus_internal(&mut self, fields: &mut [Box<dyn Input>], new_index: Option<usize>) {
        if let Some(input) = self.focus_index.and_then(|i| fields.get_mut(i)) {
            input.set_focused(false);
        }

        if let Some(input) = new_index.and_then(|i| fields.get_mut(i)) {
            input.set_focused(true);
        }

        self.focus_index = new_index;
    }

    fn update_focused_input<F>(&mut self, fields: &mut [Box<dyn Input>], update: F) -> Vec<FormEvent>
    where
        F: FnOnce(&mut dyn Input) -> Option<KeyResult>,
    {
        let Some(input) = self.focus_index.and_then(|i| fields.get_mut(i)) else {
            return vec![];
        };

        let before = input.value();
        let result = update(input.as_mut());
        let after = input.value();

        let mut events = Vec::new();

        if before != after {
            let id = input.id().clone();
            input.clear_error();
            events.push(FormEvent::ValueChanged {
                id: id.clone(),
                value: after,
            });
            events.push(FormEvent::ErrorCancelled { id });
        }

        if matches!(result, Some(KeyResult::Submit)) {
            events.push(FormEvent::SubmitRequested);
        }

        events
    }
}
