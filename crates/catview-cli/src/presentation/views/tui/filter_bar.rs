use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::FilterBarViewModel;

/// Search box and category selector.
///
/// While `editing` the renderer's input buffer is shown instead of the
/// committed query, with a cursor.
pub struct FilterBarView<'a> {
    model: &'a FilterBarViewModel,
    editing: Option<&'a str>,
}

impl<'a> FilterBarView<'a> {
    pub fn new(model: &'a FilterBarViewModel) -> Self {
        Self {
            model,
            editing: None,
        }
    }

    pub fn editing(mut self, input: &'a str) -> Self {
        self.editing = Some(input);
        self
    }
}

impl<'a> Widget for FilterBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (query, query_style) = match self.editing {
            Some(input) => (
                format!("{}▏", input),
                Style::default().fg(Color::Yellow),
            ),
            None => (self.model.query.clone(), Style::default()),
        };

        let refresh_style = if self.model.refresh_enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };

        let line = Line::from(vec![
            Span::styled("[/]", Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(query, query_style),
            Span::raw("   "),
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(
                &self.model.category_label,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " ({}/{})",
                self.model.category_position, self.model.category_options
            )),
            Span::raw("   "),
            Span::styled("[r]efresh", refresh_style),
        ]);

        let block = Block::default().title(" Filter ").borders(Borders::ALL);
        Paragraph::new(line).block(block).render(area, buf);
    }
}
