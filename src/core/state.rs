use crate::core::form::{FieldErrors, Form, FormValues, Submission};
use crate::core::form_engine::FormEngine;

pub struct AppState {
    pub form: Form,
    pub engine: FormEngine,
    pub values: FormValues,
    pub errors: FieldErrors,
    pub submission: Option<Submission>,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(mut form: Form) -> Self {
        let engine = FormEngine::new(&mut form.fields);
        let values = form.values();

        Self {
            form,
            engine,
            values,
            errors: FieldErrors::new(),
            submission: None,
            should_exit: false,
        }
    }

    /// Restores the initial empty record: widget state, values and errors.
    pub fn reset_form(&mut self) {
        for field in &mut self.form.fields {
            field.reset();
            field.clear_error();
        }
        self.values = self.form.values();
        self.errors.clear();
        self.engine.reset(&mut self.form.fields);
    }

    pub fn take_submission(&mut self) -> Option<Submission> {
        self.submission.take()
    }
}
