// Renderer module - text utilities shared by the table view and --print mode

use crate::format::AmountFormatter;
use crate::forward_core::{Bar, ForwardTable};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Render a two-segment bar `width` cells wide
pub fn bar_segments(bar: &Bar, width: usize) -> String {
    let filled = ((bar.percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut out = String::with_capacity(width * FILLED.len_utf8());
    out.extend(std::iter::repeat(FILLED).take(filled));
    out.extend(std::iter::repeat(EMPTY).take(width - filled));
    out
}

/// Table cells in column order: alias, channel, incoming, outgoing
pub fn row_cells(table: &ForwardTable, formatter: &AmountFormatter) -> Vec<[String; 4]> {
    let no_unit = table.amounts_without_unit();
    table
        .rows
        .iter()
        .map(|row| {
            [
                row.alias.clone(),
                row.channel.clone(),
                formatter.format(row.incoming, no_unit),
                formatter.format(row.outgoing, no_unit),
            ]
        })
        .collect()
}

/// Plain text rendering of the whole table
pub fn render_plain(table: &ForwardTable, formatter: &AmountFormatter, bar_width: usize) -> Vec<String> {
    row_cells(table, formatter)
        .into_iter()
        .zip(&table.rows)
        .map(|([alias, channel, incoming, outgoing], row)| {
            format!(
                "{:<20} {:<16} {:>16} {:>16} {} {}",
                alias,
                channel,
                incoming,
                outgoing,
                bar_segments(&row.incoming_bar, bar_width),
                bar_segments(&row.outgoing_bar, bar_width),
            )
        })
        .collect()
}
