use crate::input::input::{Input, InputBase, KeyResult};
use crate::input::validators::Validator;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::ui::theme::Theme;

/// Cycles through a fixed option list; the first option is conventionally a
/// placeholder that the `selection` validator rejects.
pub struct SelectInput {
    base: InputBase,
    options: Vec<String>,
    selected: usize,
}

impl SelectInput {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            base: InputBase::new(id, label),
            options,
            selected: 0,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    fn current_option(&self) -> Option<&str> {
        self.options.get(self.selected).map(|s| s.as_str())
    }

    fn move_left(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        self.selected = (self.selected + len - 1) % len;
    }

    fn move_right(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }
}

impl Input for SelectInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        self.current_option().unwrap_or("").to_string()
    }

    fn set_value(&mut self, value: String) {
        if let Some(pos) = self.options.iter().position(|opt| opt == &value) {
            self.selected = pos;
        }
    }

    fn reset(&mut self) {
        self.selected = 0;
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Left | KeyCode::Up => {
                self.move_left();
                KeyResult::Handled
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                self.move_right();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let option = self.current_option().unwrap_or("");
        let style = if self.selected == 0 {
            theme.placeholder
        } else {
            Style::default()
        };
        let text = if self.base.focused {
            format!("< {} >", option)
        } else {
            option.to_string()
        };
        vec![Span::styled(text, style)]
    }

    fn cursor_offset_in_content(&self) -> usize {
        0
    }

    fn wants_cursor(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::SelectInput;
    use crate::input::input::Input;
    use crate::terminal::{KeyCode, KeyModifiers};

    fn gender_select() -> SelectInput {
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
    }

    #[test]
    fn starts_on_placeholder() {
        assert_eq!(gender_select().value(), "Select");
    }

    #[test]
    fn cycling_wraps_in_both_directions() {
        let mut select = gender_select();
        select.handle_key(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(select.value(), "Other");
        select.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(select.value(), "Select");
        select.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(select.value(), "Female");
    }

    #[test]
    fn set_value_ignores_unknown_options() {
        let mut select = gender_select();
        select.set_value("Male".to_string());
        assert_eq!(select.value(), "Male");
        select.set_value("Unknown".to_string());
        assert_eq!(select.value(), "Male");
    }

    #[test]
    fn reset_returns_to_placeholder() {
        let mut select = gender_select();
        select.set_value("Other".to_string());
        select.reset();
        assert_eq!(select.value(), "Select");
    }
}
