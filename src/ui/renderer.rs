use crate::core::state::AppState;
use crate::terminal::terminal::{Pos, Terminal};
use crate::ui::frame::{Frame, Line};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use std::io;
use unicode_width::UnicodeWidthStr;

const FOCUS_MARKER: &str = "> ";
const BLANK_MARKER: &str = "  ";
const ERROR_MARKER: &str = "    ! ";

/// Redraws the whole form in place on every render, anchored at the cursor
/// position captured on the first draw.
pub struct Renderer {
    origin: Option<Pos>,
    last_height: u16,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            origin: None,
            last_height: 0,
        }
    }

    pub fn render(
        &mut self,
        state: &AppState,
        theme: &Theme,
        terminal: &mut Terminal,
    ) -> io::Result<()> {
        let (frame, cursor) = build_frame(state, theme);
        let height = frame.height() as u16;
        let size = terminal.size();

        let mut origin = *self.origin.get_or_insert_with(|| terminal.cursor_position());
        origin.x = 0;
        if origin.y + height > size.height {
            let overflow = origin.y + height - size.height;
            terminal.scroll_up(overflow)?;
            origin.y = origin.y.saturating_sub(overflow);
        }
        self.origin = Some(origin);

        terminal.queue_hide_cursor()?;
        for (i, line) in frame.lines().iter().enumerate() {
            terminal.queue_move_cursor(0, origin.y + i as u16)?;
            terminal.queue_clear_line()?;
            terminal.render_line(line)?;
        }

        // Lines left behind by a taller previous frame.
        for row in height..self.last_height {
            terminal.queue_move_cursor(0, origin.y + row)?;
            terminal.queue_clear_line()?;
        }
        self.last_height = height;

        if let Some((col, row)) = cursor {
            terminal.queue_move_cursor(col, origin.y + row)?;
            terminal.queue_show_cursor()?;
        }
        terminal.flush()
    }

    pub fn move_to_end(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let origin = match self.origin {
            Some(origin) => origin,
            None => terminal.cursor_position(),
        };
        terminal.move_cursor(0, origin.y + self.last_height)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_frame(state: &AppState, theme: &Theme) -> (Frame, Option<(u16, u16)>) {
    let mut frame = Frame::new();
    let mut cursor = None;

    frame.push_line(Line::from_spans(vec![Span::styled(
        state.form.title.as_str(),
        theme.prompt,
    )]));
    if let Some(hint) = &state.form.hint {
        frame.push_line(Line::from_spans(vec![Span::styled(
            hint.as_str(),
            theme.hint,
        )]));
    }
    frame.push_blank();

    let label_width = state
        .form
        .fields
        .iter()
        .map(|f| f.label().width())
        .max()
        .unwrap_or(0);

    for field in &state.form.fields {
        let marker = if field.is_focused() {
            FOCUS_MARKER
        } else {
            BLANK_MARKER
        };
        let label = format!("{:<width$}: ", field.label(), width = label_width);

        let mut spans = vec![Span::new(marker), Span::styled(label.as_str(), theme.label)];
        spans.extend(field.render_content(theme));
        let line = Line::from_spans(spans);

        if field.is_focused() && field.wants_cursor() {
            let col = marker.width() + label.width() + field.cursor_offset_in_content();
            cursor = Some((col as u16, frame.height() as u16));
        }
        frame.push_line(line);

        if let Some(error) = field.error() {
            frame.push_line(Line::from_spans(vec![Span::styled(
                format!("{}{}", ERROR_MARKER, error),
                theme.error,
            )]));
        }
    }

    frame.trim_trailing_empty();
    (frame, cursor)
}
