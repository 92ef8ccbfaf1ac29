use crate::core::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue};
use crate::core::form::{Form, Submission};
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::AppState;
use crate::input::{CharPolicy, DateInput, SelectInput, TextInput, validators};
use crate::terminal::{KeyEvent, Terminal};
use crate::ui::renderer::Renderer;
use crate::ui::theme::Theme;
use std::io;
use std::time::{Duration, Instant};

const ERROR_TIMEOUT: Duration = Duration::from_secs(2);

pub struct App {
    pub state: AppState,
    pub renderer: Renderer,
    action_bindings: ActionBindings,
    event_queue: EventQueue,
    theme: Theme,
}

impl App {
    pub fn new(form: Form) -> Self {
        Self {
            state: AppState::new(form),
            renderer: Renderer::new(),
            action_bindings: ActionBindings::new(),
            event_queue: EventQueue::new(),
            theme: Theme::default_theme(),
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.event_queue.emit(AppEvent::Key(key_event));
    }

    /// Drains every due event; true when anything was processed.
    pub fn tick(&mut self) -> bool {
        let mut processed_any = false;
        loop {
            let now = Instant::now();
            let Some(event) = self.event_queue.next_ready(now) else {
                break;
            };
            self.dispatch_event(event);
            processed_any = true;
        }
        processed_any
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        self.renderer.render(&self.state, &self.theme, terminal)
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    pub fn take_submission(&mut self) -> Option<Submission> {
        self.state.take_submission()
    }

    fn dispatch_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key_event) => {
                if let Some(action) = self.action_bindings.handle_key(&key_event) {
                    let effects = Reducer::reduce(&mut self.state, action, ERROR_TIMEOUT);
                    self.apply_effects(effects);
                    return;
                }

                let effects = Reducer::reduce(
                    &mut self.state,
                    Action::InputKey(key_event),
                    ERROR_TIMEOUT,
                );
                self.apply_effects(effects);
            }
            AppEvent::Action(action) => {
                let effects = Reducer::reduce(&mut self.state, action, ERROR_TIMEOUT);
                self.apply_effects(effects);
            }
            AppEvent::ValueChanged { .. } | AppEvent::FocusChanged { .. } | AppEvent::Submitted => {}
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.event_queue.emit(event),
                Effect::EmitAfter(event, delay) => self.event_queue.emit_after(event, delay),
                Effect::CancelClearError(id) => self.event_queue.cancel_clear_error_message(&id),
            }
        }
    }
}

const NAVIGATION_HINT: &str =
    "Tab/Shift+Tab moves between fields, Enter submits, Esc cancels";

/// The personal-data form: every value is captured as text and the payload
/// carries an age derived from the birth date.
pub fn personal_form() -> Form {
    Form::new("personal", "Personal data")
        .hint(NAVIGATION_HINT)
        .field(
            TextInput::new("name", "Name")
                .with_policy(CharPolicy::Letters)
                .with_validator(validators::required())
                .with_validator(validators::min_length(3)),
        )
        .field(
            TextInput::new("surname", "Surname")
                .with_policy(CharPolicy::Letters)
                .with_validator(validators::required())
                .with_validator(validators::min_length(3)),
        )
        .field(
            TextInput::new("national_id", "National ID")
                .with_policy(CharPolicy::Digits { max: Some(11) })
                .with_validator(validators::national_id()),
        )
        .field(
            TextInput::new("address", "Address")
                .with_policy(CharPolicy::Letters)
                .with_validator(validators::required()),
        )
        .field(
            SelectInput::new(
                "gender",
                "Gender",
                vec![
                    "Select".to_string(),
                    "Female".to_string(),
                    "Male".to_string(),
                    "Other".to_string(),
                ],
            )
            .with_validator(validators::selection("Select")),
        )
        .field(
            TextInput::new("salary", "Salary")
                .with_policy(CharPolicy::Digits { max: None })
                .with_validator(validators::positive_number()),
        )
        .field(
            DateInput::new("birth_date", "Birth Date")
                .with_validator(validators::required())
                .with_validator(validators::past_date()),
        )
        .age_from("birth_date")
}

/// Small sample form with an email and a subject dropdown.
pub fn contact_form() -> Form {
    Form::new("contact", "Contact us")
        .hint(NAVIGATION_HINT)
        .field(
            TextInput::new("name", "Name")
                .with_policy(CharPolicy::Letters)
                .with_validator(validators::required())
                .with_validator(validators::min_length(3)),
        )
        .field(
            TextInput::new("email", "Email")
                .with_validator(validators::required())
                .with_validator(validators::email()),
        )
        .field(
            SelectInput::new(
                "subject",
                "Subject",
                vec![
                    "Select".to_string(),
                    "Support".to_string(),
                    "Sales".to_string(),
                    "Feedback".to_string(),
                ],
            )
            .with_validator(validators::selection("Select")),
        )
}

#[cfg(test)]
mod tests {
    use super::{contact_form, personal_form};
    use crate::core::validation::validate_form;

    #[test]
    fn personal_form_declares_expected_fields() {
        let form = personal_form();
        let ids: Vec<&str> = form.fields.iter().map(|f| f.id().as_str()).collect();
        assert_eq!(
            ids,
            [
                "name",
                "surname",
                "national_id",
                "address",
                "gender",
                "salary",
                "birth_date"
            ]
        );
        assert_eq!(form.age_source.as_deref(), Some("birth_date"));
    }

    #[test]
    fn pristine_personal_form_fails_validation_everywhere() {
        let form = personal_form();
        let errors = validate_form(&form.fields);
        assert_eq!(errors.len(), form.fields.len());
    }

    #[test]
    fn contact_form_has_no_age_source() {
        let form = contact_form();
        assert!(form.age_source.is_none());
        let ids: Vec<&str> = form.fields.iter().map(|f| f.id().as_str()).collect();
        assert_eq!(ids, ["name", "email", "subject"]);
    }
}
