use crate::core::form::FieldErrors;
use crate::input::Input;

/// Runs a single input's validator stack over its current value.
///
/// Empty values still run the stack so `required` can fire, but a partially
/// typed structured input (an unfinished date) fails early instead of being
/// handed to format validators.
pub fn validate_input(input: &dyn Input) -> Result<(), String> {
    let raw = input.raw_value();
    if raw.is_empty() {
        return run_validators(input, &raw);
    }
    if !input.is_complete() {
        return Err("Incomplete value".to_string());
    }
    input.validate_internal()?;
    run_validators(input, &input.value())
}

/// Revalidates every field, collecting all failures. Pure over the current
/// widget values; does not touch widget error slots.
pub fn validate_form(fields: &[Box<dyn Input>]) -> FieldErrors {
    fields
        .iter()
        .filter_map(|field| {
            validate_input(field.as_ref())
                .err()
                .map(|err| (field.id().clone(), err))
        })
        .collect()
}

fn run_validators(input: &dyn Input, value: &str) -> Result<(), String> {
    for validator in input.validators() {
        validator(value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_form, validate_input};
    use crate::input::{CharPolicy, DateInput, Input, SelectInput, TextInput, validators};
    use crate::terminal::{KeyCode, KeyModifiers};

    fn name_input() -> TextInput {
        TextInput::new("name", "Name")
            .with_policy(CharPolicy::Letters)
            .with_validator(validators::required())
            .with_validator(validators::min_length(3))
    }

    #[test]
    fn empty_required_field_fails_with_required_message() {
        let input = name_input();
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err, "This field is required");
    }

    #[test]
    fn validators_run_in_declaration_order() {
        let mut input = name_input();
        input.set_value("ab".to_string());
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err, "Must have at least 3 characters");
    }

    #[test]
    fn partial_date_fails_as_incomplete() {
        let mut input = DateInput::new("birth_date", "Birth Date")
            .with_validator(validators::required());
        input.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err, "Incomplete value");
    }

    #[test]
    fn form_sweep_collects_every_failure() {
        let fields: Vec<Box<dyn Input>> = vec![
            Box::new(name_input()),
            Box::new(
                TextInput::new("national_id", "National ID")
                    .with_policy(CharPolicy::Digits { max: Some(11) })
                    .with_validator(validators::national_id()),
            ),
            Box::new(
                SelectInput::new(
                    "gender",
                    "Gender",
                    vec!["Select".to_string(), "Other".to_string()],
                )
                .with_validator(validators::selection("Select")),
            ),
        ];

        let errors = validate_form(&fields);
        assert_eq!(errors.len(), 3);
        let keys: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "national_id", "gender"]);
    }

    #[test]
    fn valid_fields_produce_no_entries() {
        let mut name = name_input();
        name.set_value("Ana".to_string());
        let fields: Vec<Box<dyn Input>> = vec![Box::new(name)];
        assert!(validate_form(&fields).is_empty());
    }
}
