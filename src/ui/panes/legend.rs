//! Color legend for element states

use crate::model::ElementState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub fn render_legend_pane(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Legend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let lines: Vec<Line> = ElementState::ALL
        .iter()
        .map(|state| {
            Line::from(vec![
                Span::styled(
                    "██",
                    Style::default().fg(DEFAULT_THEME.state_color(*state)),
                ),
                Span::styled(
                    format!(" {}", state.label()),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
