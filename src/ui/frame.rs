use crate::ui::span::Span;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        let mut line = Self::new();
        for span in spans {
            line.push(span);
        }
        line
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn push(&mut self, span: Span) {
        if !span.text().is_empty() {
            self.spans.push(span);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.width()).sum()
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Line>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn push_blank(&mut self) {
        self.lines.push(Line::new());
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn trim_trailing_empty(&mut self) {
        while self.lines.last().map(|l| l.is_empty()).unwrap_or(false) {
            self.lines.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Frame, Line};
    use crate::ui::span::Span;

    #[test]
    fn empty_spans_are_dropped() {
        let mut line = Line::new();
        line.push(Span::new(""));
        line.push(Span::new("x"));
        assert_eq!(line.spans().len(), 1);
    }

    #[test]
    fn trim_removes_trailing_blanks_only() {
        let mut frame = Frame::new();
        frame.push_line(Line::from_spans(vec![Span::new("a")]));
        frame.push_blank();
        frame.push_blank();
        frame.trim_trailing_empty();
        assert_eq!(frame.height(), 1);
    }
}
