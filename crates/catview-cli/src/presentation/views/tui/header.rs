use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::HeaderViewModel;

pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" catview · {} ", self.model.source))
            .borders(Borders::ALL);

        let line = Line::from(vec![
            Span::raw(format!("{}: ", self.model.last_updated_label)),
            Span::styled(
                &self.model.last_updated,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::raw(format!("{}: ", self.model.product_count_label)),
            Span::styled(
                &self.model.product_count,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
