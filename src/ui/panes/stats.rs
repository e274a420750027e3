//! Counters and playback settings sidebar

use crate::playback::Player;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<13}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Render step position, comparison/swap counters, speed and size
pub fn render_stats_pane(frame: &mut Frame, area: Rect, player: &Player, array_size: usize) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let current = player.current();
    let lines = vec![
        stat_line(
            "Step",
            format!("{} / {}", player.position(), player.total_frames()),
        ),
        stat_line("Comparisons", current.comparisons.to_string()),
        stat_line("Swaps", current.swaps.to_string()),
        Line::from(""),
        stat_line(
            "Speed",
            format!(
                "{}% ({}ms)",
                player.speed().get(),
                player.delay().as_millis()
            ),
        ),
        stat_line("Array Size", array_size.to_string()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg));
    frame.render_widget(paragraph, area);
}
