use crate::input::input::{Input, InputBase, KeyResult};
use crate::input::validators::Validator;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentType {
    Year,
    Month,
    Day,
}

impl SegmentType {
    fn min_value(self) -> u32 {
        match self {
            SegmentType::Year => 1900,
            SegmentType::Month | SegmentType::Day => 1,
        }
    }

    fn max_value(self) -> u32 {
        match self {
            SegmentType::Year => 2100,
            SegmentType::Month => 12,
            SegmentType::Day => 31,
        }
    }

    fn length(self) -> usize {
        match self {
            SegmentType::Year => 4,
            _ => 2,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            SegmentType::Year => "yyyy",
            SegmentType::Month => "mm",
            SegmentType::Day => "dd",
        }
    }
}

#[derive(Debug, Clone)]
struct DateSegment {
    segment_type: SegmentType,
    value: String,
}

impl DateSegment {
    fn new(segment_type: SegmentType) -> Self {
        Self {
            segment_type,
            value: String::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn is_complete(&self) -> bool {
        self.value.len() == self.segment_type.length()
    }

    fn numeric_value(&self) -> u32 {
        self.value.parse().unwrap_or(0)
    }

    fn increment(&mut self) {
        let current = self.numeric_value();
        let max = self.segment_type.max_value();
        let min = self.segment_type.min_value();
        let next = if current >= max || current < min {
            min
        } else {
            current + 1
        };
        self.value = format!("{:0width$}", next, width = self.segment_type.length());
    }

    fn decrement(&mut self) {
        let current = self.numeric_value();
        let max = self.segment_type.max_value();
        let min = self.segment_type.min_value();
        let prev = if current <= min || current == 0 {
            max
        } else {
            current - 1
        };
        self.value = format!("{:0width$}", prev, width = self.segment_type.length());
    }

    fn insert_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.value.len() >= self.segment_type.length() {
            self.value = digit.to_string();
            return;
        }
        self.value.push(digit);
        if let Ok(val) = self.value.parse::<u32>() {
            if val > self.segment_type.max_value() {
                self.value = digit.to_string();
            }
        }
    }

    fn delete_digit(&mut self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        self.value.pop();
        true
    }

    fn display_string(&self) -> String {
        let len = self.segment_type.length();
        if self.value.is_empty() {
            self.segment_type.placeholder().to_string()
        } else if self.value.len() < len {
            let placeholder = self.segment_type.placeholder();
            format!("{}{}", self.value, &placeholder[self.value.len()..len])
        } else {
            self.value.clone()
        }
    }

    // Pads a partially typed segment ("7" -> "07") when focus moves on.
    fn pad(&mut self) {
        if self.value.is_empty() {
            return;
        }
        let len = self.segment_type.length();
        if self.value.len() < len {
            if let Ok(val) = self.value.parse::<u32>() {
                self.value = format!("{:0width$}", val, width = len);
            }
        }
    }
}

const SEPARATOR: &str = "-";

/// Segmented `YYYY-MM-DD` entry. `value()` yields the ISO string only once
/// all three segments are filled; the birth-date validator handles the rest.
pub struct DateInput {
    base: InputBase,
    segments: [DateSegment; 3],
    focused_segment: usize,
}

impl DateInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            segments: [
                DateSegment::new(SegmentType::Year),
                DateSegment::new(SegmentType::Month),
                DateSegment::new(SegmentType::Day),
            ],
            focused_segment: 0,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    fn format_value(&self) -> String {
        let parts: Vec<&str> = self.segments.iter().map(|s| s.value.as_str()).collect();
        parts.join(SEPARATOR)
    }

    fn is_complete_internal(&self) -> bool {
        self.segments.iter().all(|s| s.is_complete())
    }

    fn move_next(&mut self) -> bool {
        self.segments[self.focused_segment].pad();
        if self.focused_segment + 1 < self.segments.len() {
            self.focused_segment += 1;
            true
        } else {
            false
        }
    }

    fn move_prev(&mut self) -> bool {
        if self.focused_segment > 0 {
            self.focused_segment -= 1;
            true
        } else {
            false
        }
    }

    fn focused_segment_mut(&mut self) -> &mut DateSegment {
        &mut self.segments[self.focused_segment]
    }
}

impl Input for DateInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        if self.is_complete_internal() {
            self.format_value()
        } else {
            String::new()
        }
    }

    fn set_value(&mut self, value: String) {
        for segment in &mut self.segments {
            segment.value.clear();
        }
        self.focused_segment = 0;

        if value.is_empty() {
            return;
        }

        let parts: Vec<&str> = value.split(SEPARATOR).collect();
        if parts.len() != self.segments.len() {
            return;
        }
        let well_formed = parts.iter().zip(self.segments.iter()).all(|(part, seg)| {
            part.len() == seg.segment_type.length() && part.chars().all(|c| c.is_ascii_digit())
        });
        if !well_formed {
            return;
        }
        for (segment, part) in self.segments.iter_mut().zip(parts) {
            segment.value = part.to_string();
        }
    }

    fn raw_value(&self) -> String {
        if self.segments.iter().all(|s| s.is_empty()) {
            String::new()
        } else {
            self.format_value()
        }
    }

    fn is_complete(&self) -> bool {
        // An untouched date input counts as complete-but-empty so that only
        // the required validator fires for it.
        self.segments.iter().all(|s| s.is_empty()) || self.is_complete_internal()
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                self.focused_segment_mut().insert_digit(ch);
                if self.segments[self.focused_segment].is_complete() {
                    self.move_next();
                }
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                if !self.focused_segment_mut().delete_digit() {
                    self.move_prev();
                }
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.move_prev();
                KeyResult::Handled
            }
            KeyCode::Right | KeyCode::Char('-') | KeyCode::Char('/') => {
                self.move_next();
                KeyResult::Handled
            }
            KeyCode::Up => {
                self.focused_segment_mut().increment();
                KeyResult::Handled
            }
            KeyCode::Down => {
                self.focused_segment_mut().decrement();
                KeyResult::Handled
            }
            KeyCode::Enter => {
                self.focused_segment_mut().pad();
                KeyResult::Submit
            }
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let mut spans = Vec::new();

        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                spans.push(Span::new(SEPARATOR));
            }

            let mut style = if segment.is_empty() {
                theme.placeholder
            } else {
                Style::default()
            };
            if i == self.focused_segment && self.base.focused {
                style = style.merge(&theme.focused);
            }

            spans.push(Span::styled(segment.display_string(), style));
        }

        spans
    }

    fn cursor_offset_in_content(&self) -> usize {
        let mut offset = 0;
        for i in 0..self.focused_segment {
            offset += self.segments[i].display_string().width() + SEPARATOR.width();
        }
        offset + self.segments[self.focused_segment].value.width()
    }
}
