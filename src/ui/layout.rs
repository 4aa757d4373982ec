use {
    crate::{format::AmountFormatter, state::State, ui::renderer},
    ratatui::{
        layout::{Constraint, Direction, Layout as RatLayout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Paragraph, Row, Table},
        Frame,
    },
};

const BAR_WIDTH: u16 = 20;

/// Render the main UI layout
pub fn render_layout(f: &mut Frame, area: Rect, state: &State, formatter: &AmountFormatter) {
    let chunks = RatLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Forwards table
            Constraint::Length(3), // Footer/Status
        ])
        .split(area);

    render_header(f, chunks[0], state);
    render_forwards_table(f, chunks[1], state, formatter);
    render_footer(f, chunks[2], state);
}

fn render_header(f: &mut Frame, area: Rect, state: &State) {
    let text = vec![
        Line::from(vec![
            Span::styled("Forwards", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(format!(" - last {} days, ordered by {}", state.days, state.order)),
        ]),
        Line::from(vec![Span::raw(
            "q/Esc quit | o change order | +/- window | r refresh",
        )]),
    ];

    let header = Block::default().borders(Borders::ALL).title("Forward Flow");
    f.render_widget(Paragraph::new(text).block(header), area);
}

fn render_forwards_table(f: &mut Frame, area: Rect, state: &State, formatter: &AmountFormatter) {
    let block = Block::default().borders(Borders::ALL).title("Forwards by Channel");

    // Nothing is drawn while loading or when the window has no forwards
    let Some(table) = state.table() else {
        f.render_widget(block, area);
        return;
    };

    let header = Row::new(vec!["Alias", "Channel", "Incoming", "Outgoing", "Incoming", "Outgoing"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = renderer::row_cells(&table, formatter)
        .into_iter()
        .zip(&table.rows)
        .map(|([alias, channel, incoming, outgoing], row)| {
            Row::new(vec![
                alias,
                channel,
                incoming,
                outgoing,
                renderer::bar_segments(&row.incoming_bar, BAR_WIDTH as usize),
                renderer::bar_segments(&row.outgoing_bar, BAR_WIDTH as usize),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(20),        // Alias
        Constraint::Length(16),        // Channel
        Constraint::Length(16),        // Incoming
        Constraint::Length(16),        // Outgoing
        Constraint::Length(BAR_WIDTH), // Incoming bar
        Constraint::Length(BAR_WIDTH), // Outgoing bar
    ];

    let widget = Table::new(rows, widths).header(header).block(block);
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &State) {
    let (status, color) = if state.is_loading() {
        ("Loading", Color::Yellow)
    } else if state.last_error().is_some() {
        ("Unavailable", Color::Red)
    } else {
        ("Ready", Color::Green)
    };

    let rows = state.table().map_or(0, |t| t.rows.len());

    let mut spans = vec![
        Span::styled("Status: ", Style::default().fg(color)),
        Span::raw(status),
        Span::raw(" | "),
        Span::styled("Forwards: ", Style::default().fg(Color::Cyan)),
        Span::raw(state.event_count().to_string()),
        Span::raw(" | "),
        Span::styled("Channels: ", Style::default().fg(Color::Cyan)),
        Span::raw(rows.to_string()),
        Span::raw(" | "),
        Span::styled("Updated: ", Style::default().fg(Color::Cyan)),
        Span::raw(state.fetched_at().map_or_else(|| "never".to_string(), format_timestamp)),
    ];
    if let Some(error) = state.last_error() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(error.to_string(), Style::default().fg(Color::Red)));
    }

    let footer = Block::default().borders(Borders::ALL).title("Status");
    f.render_widget(Paragraph::new(Line::from(spans)).block(footer), area);
}

fn format_timestamp(timestamp: i64) -> String {
    use chrono::DateTime;
    use chrono::Utc;

    if let Some(dt) = DateTime::<Utc>::from_timestamp(timestamp, 0) {
        dt.format("%H:%M:%S").to_string()
    } else {
        "N/A".to_string()
    }
}
