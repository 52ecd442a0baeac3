use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};

use super::layout::{AppLayout, centered_rect};
use crate::models::Country;
use crate::state::{LoadState, VisibleRow};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const DARK: Color = Color::Rgb(24, 24, 27);
const ERROR: Color = Color::Rgb(239, 68, 68);

/// Everything the renderer reads for one frame
pub struct RenderState<'a> {
    pub input: &'a str,
    pub rows: &'a [VisibleRow<'a>],
    /// Page-relative cursor row
    pub cursor: usize,
    pub current_page: usize,
    pub page_count: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub load_state: &'a LoadState,
    pub selected: Option<&'a Country>,
    pub details: Option<&'a Country>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, state.input);
    render_table(frame, layout.table_area, state.rows, state.cursor);
    render_pager(frame, layout.pager_area, state.current_page, state.page_count);
    render_status_bar(frame, layout.status_area, state);

    if let Some(country) = state.details {
        render_details(frame, centered_rect(frame.area(), 60, 60), country);
    }
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let content = if input.is_empty() {
        Line::from(Span::styled("Filter or search: or group:", Style::default().fg(MUTED)))
    } else {
        Line::from(input)
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Country List "),
    );

    frame.render_widget(paragraph, area);
}

/// Style for a table row: selected rows use their assigned color, a selected row
/// without a color (exhausted pool) renders like any other row
fn row_style(row: &VisibleRow) -> Style {
    match row.color {
        Some(color) if row.selected => {
            let [r, g, b] = color.rgb;
            Style::default().fg(BRIGHT).bg(Color::Rgb(r, g, b)).add_modifier(Modifier::BOLD)
        }
        _ => Style::default(),
    }
}

fn render_table(frame: &mut Frame, area: Rect, rows: &[VisibleRow], cursor: usize) {
    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let marker = if idx == cursor { "> " } else { "  " };
            Row::new(vec![
                Cell::from(format!("{}{}", marker, row.country.name)),
                Cell::from(row.country.capital.as_str()),
                Cell::from(row.country.currency.as_str()),
            ])
            .style(row_style(row))
        })
        .collect();

    let header = Row::new(vec!["  Name", "Capital", "Currency"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let table = Table::new(
        table_rows,
        [Constraint::Percentage(50), Constraint::Percentage(30), Constraint::Percentage(20)],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)));

    frame.render_widget(table, area);
}

fn render_pager(frame: &mut Frame, area: Rect, current_page: usize, page_count: usize) {
    let text = if page_count == 0 {
        " No pages ".to_string()
    } else {
        format!(" ← Page {}/{} → ", current_page, page_count)
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn status_text(state: &RenderState) -> (String, Style) {
    let base = Style::default().fg(BRIGHT).bg(DARK);

    match state.load_state {
        LoadState::Pending => (" Loading countries... | Ctrl+C: quit ".to_string(), base),
        LoadState::Unavailable(reason) => (
            format!(" [NO DATA] {} | Ctrl+C: quit ", reason),
            Style::default().fg(ERROR).bg(DARK),
        ),
        LoadState::Loaded if state.filtered_count == 0 => {
            (" No countries match | Esc: clear | Ctrl+C: quit ".to_string(), base)
        }
        LoadState::Loaded => {
            let mut parts = vec![];

            if state.filtered_count < state.total_count {
                parts.push(format!("{}/{} countries", state.filtered_count, state.total_count));
            } else {
                parts.push(format!("{} countries", state.total_count));
            }

            if let Some(country) = state.selected {
                parts.push(format!("selected: {}", country.name));
            }

            parts.push("Enter: select".to_string());
            parts.push("Tab: details".to_string());
            parts.push("Ctrl+C: quit".to_string());

            (format!(" {} ", parts.join(" | ")), base)
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (text, style) = status_text(state);
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(MUTED)),
        Span::raw(value.to_string()),
    ])
}

fn render_details(frame: &mut Frame, area: Rect, country: &Country) {
    let mut lines = vec![
        detail_line("Native Name", &country.native),
        detail_line("Capital", &country.capital),
        detail_line("Currency", &country.currency),
        detail_line("Emoji", &country.emoji),
        Line::from(Span::styled("Languages:", Style::default().fg(MUTED))),
    ];
    for language in &country.languages {
        lines.push(Line::from(format!("  {} ({})", language.name, language.code)));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BRIGHT))
                .title(format!(" {} ", country.name))
                .title_bottom(" Esc: close "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
