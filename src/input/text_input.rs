use crate::input::input::{Input, InputBase, KeyResult};
use crate::input::policy::CharPolicy;
use crate::input::validators::Validator;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

pub struct TextInput {
    base: InputBase,
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    pub fn with_policy(mut self, policy: CharPolicy) -> Self {
        self.base = self.base.with_policy(policy);
        self
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.base = self.base.with_min_width(width);
        self
    }

    fn handle_char(&mut self, ch: char) {
        if !self.base.policy.accepts(ch, self.value.chars().count()) {
            return;
        }
        let char_indices: Vec<usize> = self.value.char_indices().map(|(i, _)| i).collect();
        let byte_pos = if self.cursor_pos >= char_indices.len() {
            self.value.len()
        } else {
            char_indices[self.cursor_pos]
        };
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn handle_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let char_indices: Vec<usize> = self.value.char_indices().map(|(i, _)| i).collect();
        let byte_pos = char_indices[self.cursor_pos - 1];
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
    }

    fn handle_delete(&mut self) {
        let char_indices: Vec<usize> = self.value.char_indices().map(|(i, _)| i).collect();
        if let Some(&byte_pos) = char_indices.get(self.cursor_pos) {
            self.value.remove(byte_pos);
        }
    }

    fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    fn move_right(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            self.cursor_pos += 1;
        }
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn move_word_left(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            pos -= 1;
        }

        self.cursor_pos = pos;
    }

    fn move_word_right(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            pos += 1;
        }
        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            pos += 1;
        }

        self.cursor_pos = pos;
    }

    fn delete_word_impl(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        self.value = chars.into_iter().collect();
        self.cursor_pos = pos;
    }

    fn delete_word_forward_impl(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos);
        }
        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos);
        }

        self.value = chars.into_iter().collect();
    }
}

impl Input for TextInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = self.base.policy.normalize(&value);
        self.cursor_pos = self.value.chars().count();
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) => {
                self.handle_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.handle_delete();
                KeyResult::Handled
            }
            KeyCode::Left => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_left();
                } else {
                    self.move_left();
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_right();
                } else {
                    self.move_right();
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.chars().count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let mut spans = Vec::new();
        if self.value.is_empty() && !self.base.focused {
            spans.push(Span::styled("...", theme.placeholder));
        } else {
            let style = if self.base.focused {
                theme.focused
            } else {
                Style::default()
            };
            spans.push(Span::styled(self.value.as_str(), style));
        }

        let content_width = self.value.width();
        if content_width < self.base.min_width {
            spans.push(Span::new(" ".repeat(self.base.min_width - content_width)));
        }
        spans
    }

    fn cursor_offset_in_content(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_pos)
            .map(|c| c.to_string().width())
            .sum()
    }

    fn delete_word(&mut self) {
        self.delete_word_impl();
    }

    fn delete_word_forward(&mut self) {
        self.delete_word_forward_impl();
    }
}

#[cfg(test)]
mod tests {
    use super::TextInput;
    use crate::input::input::Input;
    use crate::input::policy::CharPolicy;
    use crate::terminal::{KeyCode, KeyModifiers};

    fn type_str(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut input = TextInput::new("name", "Name");
        type_str(&mut input, "Ana");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(input.value(), "xAna");
    }

    #[test]
    fn letters_policy_drops_digits_while_typing() {
        let mut input = TextInput::new("name", "Name").with_policy(CharPolicy::Letters);
        type_str(&mut input, "An4a 9Silva");
        assert_eq!(input.value(), "Ana Silva");
    }

    #[test]
    fn digit_policy_stops_at_cap() {
        let mut input = TextInput::new("national_id", "National ID")
            .with_policy(CharPolicy::Digits { max: Some(11) });
        type_str(&mut input, "123.456.789-012345");
        assert_eq!(input.value(), "12345678901");
    }

    #[test]
    fn set_value_normalizes_through_policy() {
        let mut input = TextInput::new("salary", "Salary")
            .with_policy(CharPolicy::Digits { max: None });
        input.set_value("R$ 1.500".to_string());
        assert_eq!(input.value(), "1500");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = TextInput::new("name", "Name");
        type_str(&mut input, "abc");
        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn delete_word_removes_previous_word() {
        let mut input = TextInput::new("name", "Name");
        type_str(&mut input, "Ana Maria");
        input.delete_word();
        assert_eq!(input.value(), "Ana ");
    }

    #[test]
    fn reset_clears_value_and_cursor() {
        let mut input = TextInput::new("name", "Name");
        type_str(&mut input, "Ana");
        input.reset();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor_offset_in_content(), 0);
    }
}
