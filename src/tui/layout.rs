use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Stacked layout configuration
pub struct AppLayout {
    pub input_area: Rect,
    pub table_area: Rect,
    pub pager_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create stacked layout:
    /// - Query input: 3 rows (bordered)
    /// - Country table: remaining rows
    /// - Page indicator: 1 row
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Query input
                Constraint::Min(3),    // Table (header + at least one row)
                Constraint::Length(1), // Page indicator
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            input_area: chunks[0],
            table_area: chunks[1],
            pager_area: chunks[2],
            status_area: chunks[3],
        }
    }
}

/// Centered popup area of the given percentage size
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(vertical);
    popup
}
