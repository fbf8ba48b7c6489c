use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render keybindings help popup
pub fn render_keybindings_help(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    frame.render_widget(Clear, popup_area);

    let help_text = Paragraph::new(keybindings_content())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keybindings Help ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_text, popup_area);
}

fn keybindings_content() -> Vec<Line<'static>> {
    let section = |title: &str| -> Line<'static> {
        Line::from(vec![Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )])
    };

    let key = |k: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:12}", k),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc.to_string()),
        ])
    };

    vec![
        section("Global"),
        key("q", "Quit"),
        key("?", "Toggle this help"),
        key("Ctrl+C", "Quit from anywhere"),
        Line::from(""),
        section("Products"),
        key("j / Down", "Next product"),
        key("k / Up", "Previous product"),
        key("o / ENTER", "Open product image in browser"),
        key("R / F5", "Fetch the catalog again"),
        Line::from(""),
        section("Filters"),
        key("/", "Edit search text (ENTER re-fetches)"),
        key("c", "Cycle category"),
        key("r", "Cycle minimum rating"),
        key("s", "Cycle sort order"),
        key("x", "Clear search, category and rating"),
    ]
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
