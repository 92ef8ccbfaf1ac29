use crate::core::age;
use crate::core::event::Action;
use crate::core::event_queue::AppEvent;
use crate::core::form::{FieldId, Submission};
use crate::core::form_event::FormEvent;
use crate::core::state::AppState;
use crate::core::validation;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Effect {
    Emit(AppEvent),
    EmitAfter(AppEvent, Duration),
    CancelClearError(FieldId),
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action, error_timeout: Duration) -> Vec<Effect> {
        match action {
            Action::Exit => {
                state.should_exit = true;
                vec![]
            }
            Action::NextInput => {
                let events = state.engine.move_focus(&mut state.form.fields, 1);
                Self::process_form_events(state, events, error_timeout)
            }
            Action::PrevInput => {
                let events = state.engine.move_focus(&mut state.form.fields, -1);
                Self::process_form_events(state, events, error_timeout)
            }
            Action::Submit => Self::handle_submit(state, error_timeout),
            Action::DeleteWord => {
                let events = state.engine.handle_delete_word(&mut state.form.fields, false);
                Self::process_form_events(state, events, error_timeout)
            }
            Action::DeleteWordForward => {
                let events = state.engine.handle_delete_word(&mut state.form.fields, true);
                Self::process_form_events(state, events, error_timeout)
            }
            Action::InputKey(key_event) => {
                let events = state.engine.handle_key(&mut state.form.fields, key_event);
                Self::process_form_events(state, events, error_timeout)
            }
            Action::ClearErrorMessage(id) => {
                state.engine.clear_error(&mut state.form.fields, &id);
                vec![]
            }
        }
    }

    /// Applies form events to the state record and turns them into effects.
    /// A value change keeps `FormValues` in sync with the widget and drops
    /// the field's stale error entry.
    fn process_form_events(
        state: &mut AppState,
        events: Vec<FormEvent>,
        error_timeout: Duration,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut submit_requested = false;

        for event in events {
            match event {
                FormEvent::ValueChanged { id, value } => {
                    state.values.insert(id.clone(), value.clone());
                    state.errors.shift_remove(&id);
                    effects.push(Effect::Emit(AppEvent::ValueChanged { id, value }));
                }
                FormEvent::FocusChanged { from, to } => {
                    effects.push(Effect::Emit(AppEvent::FocusChanged { from, to }));
                }
                FormEvent::ErrorCancelled { id } => {
                    effects.push(Effect::CancelClearError(id));
                }
                FormEvent::SubmitRequested => submit_requested = true,
            }
        }

        if submit_requested {
            // Enter walks through the form; on the last field it submits.
            let mut focus_events = Vec::new();
            if state
                .engine
                .advance_focus(&mut state.form.fields, &mut focus_events)
            {
                effects.extend(Self::focus_effects(focus_events));
            } else {
                effects.extend(Self::handle_submit(state, error_timeout));
            }
        }

        effects
    }

    fn handle_submit(state: &mut AppState, error_timeout: Duration) -> Vec<Effect> {
        let mut effects = Vec::new();

        let errors = validation::validate_form(&state.form.fields);
        if errors.is_empty() {
            state.errors.clear();
            let age = state
                .form
                .age_source
                .as_ref()
                .and_then(|id| state.values.get(id.as_str()))
                .and_then(|value| age::derive_age(value));

            state.submission = Some(Submission {
                form: state.form.name.clone(),
                values: state.values.clone(),
                age,
            });
            state.reset_form();
            state.should_exit = true;
            effects.push(Effect::Emit(AppEvent::Submitted));
            return effects;
        }

        state.errors = errors;
        let applied = state
            .engine
            .apply_errors(&mut state.form.fields, &state.errors);
        for id in applied {
            effects.push(Effect::CancelClearError(id.clone()));
            effects.push(Effect::EmitAfter(
                AppEvent::Action(Action::ClearErrorMessage(id)),
                error_timeout,
            ));
        }

        if let Some((first_id, _)) = state.errors.first() {
            if let Some(idx) = state.form.field_index(first_id) {
                let mut focus_events = Vec::new();
                state
                    .engine
                    .set_focus(&mut state.form.fields, Some(idx), &mut focus_events);
                effects.extend(Self::focus_effects(focus_events));
            }
        }

        effects
    }

    fn focus_effects(events: Vec<FormEvent>) -> Vec<Effect> {
        events
            .into_iter()
            .filter_map(|event| match event {
                FormEvent::FocusChanged { from, to } => {
                    Some(Effect::Emit(AppEvent::FocusChanged { from, to }))
                }
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Effect, Reducer};
    use crate::core::age;
    use crate::core::event::Action;
    use crate::core::event_queue::AppEvent;
    use crate::core::form::Form;
    use crate::core::state::AppState;
    use crate::input::{CharPolicy, DateInput, SelectInput, TextInput, validators};
    use crate::terminal::{KeyCode, KeyEvent};
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn personal_state() -> AppState {
        let form = Form::new("personal", "Personal data")
            .field(
                TextInput::new("name", "Name")
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
                TextInput::new("salary", "Salary")
                    .with_policy(CharPolicy::Digits { max: None })
                    .with_validator(validators::positive_number()),
            )
            .field(
                DateInput::new("birth_date", "Birth Date")
                    .with_validator(validators::required()),
            )
            .field(
                SelectInput::new(
                    "gender",
                    "Gender",
                    vec!["Select".to_string(), "Female".to_string(), "Male".to_string()],
                )
                .with_validator(validators::selection("Select")),
            )
            .age_from("birth_date");
        AppState::new(form)
    }

    fn type_str(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            Reducer::reduce(state, Action::InputKey(KeyEvent::plain(KeyCode::Char(ch))), TIMEOUT);
        }
    }

    fn press(state: &mut AppState, code: KeyCode) {
        Reducer::reduce(state, Action::InputKey(KeyEvent::plain(code)), TIMEOUT);
    }

    #[test]
    fn typing_keeps_values_in_sync() {
        let mut state = personal_state();
        type_str(&mut state, "Ana");
        assert_eq!(state.values["name"], "Ana");
        assert_eq!(state.form.fields[0].value(), "Ana");
    }

    #[test]
    fn submit_with_everything_empty_flags_every_field() {
        let mut state = personal_state();
        let values_before = state.values.clone();

        let effects = Reducer::reduce(&mut state, Action::Submit, TIMEOUT);

        assert_eq!(state.errors.len(), 5);
        let keys: Vec<&str> = state.errors.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["name", "national_id", "salary", "birth_date", "gender"]
        );
        assert_eq!(state.values, values_before);
        assert!(state.submission.is_none());
        assert!(!state.should_exit);

        let scheduled_clears = effects
            .iter()
            .filter(|e| matches!(e, Effect::EmitAfter(..)))
            .count();
        assert_eq!(scheduled_clears, 5);
    }

    #[test]
    fn failed_submit_focuses_first_failing_field() {
        let mut state = personal_state();
        type_str(&mut state, "Ana");
        Reducer::reduce(&mut state, Action::Submit, TIMEOUT);
        assert_eq!(
            state.engine.focused_id(&state.form.fields).as_deref(),
            Some("national_id")
        );
    }

    #[test]
    fn editing_a_field_drops_its_error_entry() {
        let mut state = personal_state();
        Reducer::reduce(&mut state, Action::Submit, TIMEOUT);
        assert!(state.errors.contains_key("name"));

        // Focus moved to the first failing field ("name"); typing clears it.
        type_str(&mut state, "A");
        assert!(!state.errors.contains_key("name"));
        assert!(state.errors.contains_key("salary"));
    }

    #[test]
    fn successful_submit_emits_payload_with_age_and_resets() {
        let mut state = personal_state();
        type_str(&mut state, "Ana");
        Reducer::reduce(&mut state, Action::NextInput, TIMEOUT);
        type_str(&mut state, "12345678901");
        Reducer::reduce(&mut state, Action::NextInput, TIMEOUT);
        type_str(&mut state, "1500");
        Reducer::reduce(&mut state, Action::NextInput, TIMEOUT);
        type_str(&mut state, "20000615");
        Reducer::reduce(&mut state, Action::NextInput, TIMEOUT);
        press(&mut state, KeyCode::Right);

        let effects = Reducer::reduce(&mut state, Action::Submit, TIMEOUT);

        let submission = state.submission.clone().expect("submission expected");
        assert_eq!(submission.form, "personal");
        assert_eq!(submission.values["name"], "Ana");
        assert_eq!(submission.values["national_id"], "12345678901");
        assert_eq!(submission.values["birth_date"], "2000-06-15");
        assert_eq!(submission.values["gender"], "Female");
        assert_eq!(submission.age, age::derive_age("2000-06-15"));

        assert!(state.errors.is_empty());
        assert_eq!(state.values["name"], "");
        assert_eq!(state.values["gender"], "Select");
        assert_eq!(state.form.fields[0].value(), "");
        assert!(state.should_exit);
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, Effect::Emit(AppEvent::Submitted)))
        );
    }

    #[test]
    fn enter_advances_until_last_field_then_submits() {
        let mut state = personal_state();
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.engine.focus_index(), Some(1));
        assert!(state.errors.is_empty());

        // Walk to the last field, then Enter triggers the full sweep.
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.errors.len(), 5);
    }

    #[test]
    fn exit_action_sets_flag_without_submitting() {
        let mut state = personal_state();
        Reducer::reduce(&mut state, Action::Exit, TIMEOUT);
        assert!(state.should_exit);
        assert!(state.submission.is_none());
    }
}
