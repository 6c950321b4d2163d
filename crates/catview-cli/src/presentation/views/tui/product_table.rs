use catview_engine::TableBody;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::presentation::view_models::TableViewModel;

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Percentage(38),
    Constraint::Percentage(24),
    Constraint::Length(12),
    Constraint::Length(14),
    Constraint::Length(10),
];

pub struct ProductTableView<'a> {
    model: &'a TableViewModel,
    offset: usize,
}

impl<'a> ProductTableView<'a> {
    pub fn new(model: &'a TableViewModel) -> Self {
        Self { model, offset: 0 }
    }

    /// First row to draw.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl<'a> Widget for ProductTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);

        let rows = match &self.model.body {
            // A single message spanning the full table width
            TableBody::Placeholder { message, .. } => {
                Paragraph::new(message.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block)
                    .render(area, buf);
                return;
            }
            TableBody::Rows { rows } => rows,
        };

        let header = Row::new(
            self.model
                .headers
                .iter()
                .map(|h| Cell::from(h.as_str())),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let body = rows.iter().skip(self.offset).map(|row| {
            let mut name = vec![Span::raw(row.name.as_str())];
            if let Some(link) = &row.link {
                name.push(Span::raw(" "));
                name.push(Span::styled(
                    link.label.as_str(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ));
            }

            Row::new(vec![
                Cell::from(Line::from(name)),
                Cell::from(row.category.as_str()),
                Cell::from(row.total_price.as_str()),
                Cell::from(row.unit_price.as_str()),
                Cell::from(row.available_glyph.as_str()),
            ])
        });

        Table::new(body, COLUMN_WIDTHS)
            .header(header)
            .block(block)
            .render(area, buf);
    }
}
