//! Bar chart of the current frame

use crate::config::BAR_CEILING;
use crate::generator::Algorithm;
use crate::model::Frame as RunFrame;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Padding, Paragraph},
    Frame,
};

/// Width and gap that fit `count` bars into `width` columns
pub fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = count.min(u16::MAX as usize) as u16;
    let gap = if width >= count.saturating_mul(2) { 1 } else { 0 };
    let gaps = gap * count.saturating_sub(1);
    let bar_width = (width.saturating_sub(gaps) / count).max(1);
    (bar_width, gap)
}

/// Render the visualization pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, algorithm: Algorithm, current: &RunFrame) {
    let block = Block::default()
        .title(format!(" {} ", algorithm.name()))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 1, 1, 0));

    if current.array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(4);
    let (bar_width, gap) = bar_geometry(inner_width, current.array.len());
    let show_values = bar_width >= 3;

    let bars: Vec<Bar> = current
        .array
        .iter()
        .map(|element| {
            let color = DEFAULT_THEME.state_color(element.state);
            let text = if show_values {
                element.value.to_string()
            } else {
                String::new()
            };
            Bar::default()
                .value(u64::from(element.value))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
                .text_value(text)
        })
        .collect();

    let ceiling = current
        .array
        .iter()
        .map(|e| e.value)
        .max()
        .unwrap_or(0)
        .max(BAR_CEILING);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .max(u64::from(ceiling));

    frame.render_widget(chart, area);
}
