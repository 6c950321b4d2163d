//! Bottom status bar: load phase, counts and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.status.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::raw(format!("{}/{} ", self.model.shown, self.model.total)),
            Span::raw("| "),
            Span::raw(format!("{} cat. ", self.model.categories)),
            Span::raw("| "),
            Span::styled(&self.model.status.label, Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let help_line = Line::from(vec![
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw("uit "),
            Span::styled("[/]", Style::default().fg(Color::Yellow)),
            Span::raw("search "),
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::raw("category "),
            Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
            Span::raw("scroll"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
