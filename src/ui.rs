//! UI rendering for the pixdeck gallery
//!
//! Implements the terminal interface with:
//! - Header with ASCII logo and page/status info
//! - Left panel: gallery list with loading indicator and error banner
//! - Right panel: analytics event log with pretty-printed params
//! - Bottom: pagination bar and keybind hints

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::analytics::pretty_print_json;
use crate::app::App;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Loading/active elements - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Error banner color
pub const COLOR_ERROR: Color = Color::Red;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// PIXDECK ASCII Logo
// ============================================================================

const PIXDECK_LOGO: &[&str] = &[
    "██████╗ ██╗██╗  ██╗██████╗ ███████╗ ██████╗██╗  ██╗",
    "██╔══██╗██║╚██╗██╔╝██╔══██╗██╔════╝██╔════╝██║ ██╔╝",
    "██████╔╝██║ ╚███╔╝ ██║  ██║█████╗  ██║     █████╔╝ ",
    "██╔═══╝ ██║ ██╔██╗ ██║  ██║██╔══╝  ██║     ██╔═██╗ ",
    "██║     ██║██╔╝ ██╗██████╔╝███████╗╚██████╗██║  ██╗",
    "╚═╝     ╚═╝╚═╝  ╚═╝╚═════╝ ╚══════╝ ╚═════╝╚═╝  ╚═╝",
];

/// Spinner frames for the loading indicator.
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the gallery screen.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main outer border
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, size);

    let inner = inner_rect(size, 1);
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header with logo
            Constraint::Min(10),   // Main content area
            Constraint::Length(3), // Pagination bar + hints
        ])
        .split(inner);

    render_header(frame, main_chunks[0], app);
    render_main_content(frame, main_chunks[1], app);
    render_footer(frame, main_chunks[2], app);
}

/// Get inner rect with margin
fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

// ============================================================================
// Header Section
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),  // Left margin
            Constraint::Length(53), // Logo width
            Constraint::Min(1),     // Flexible spacer
            Constraint::Length(36), // Right-aligned status info
        ])
        .split(area);

    render_logo(frame, header_chunks[1]);
    render_header_info(frame, header_chunks[3], app);
}

fn render_logo(frame: &mut Frame, area: Rect) {
    let logo_lines: Vec<Line> = PIXDECK_LOGO
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(COLOR_HEADER))))
        .collect();

    let logo = Paragraph::new(logo_lines);
    frame.render_widget(logo, area);
}

fn render_header_info(frame: &mut Frame, area: Rect, app: &App) {
    let (status_icon, status_text, status_color) = if app.loading {
        let frame_idx = (app.tick_count / 4) as usize % SPINNER.len();
        (SPINNER[frame_idx], "Loading", COLOR_ACTIVE)
    } else if app.error.is_some() {
        ("✗", "Error", COLOR_ERROR)
    } else {
        ("●", "Ready", COLOR_ACTIVE)
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("PICSUM GALLERY v{}", env!("CARGO_PKG_VERSION")),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("[", Style::default().fg(COLOR_DIM)),
            Span::styled(status_icon, Style::default().fg(status_color)),
            Span::styled("] ", Style::default().fg(COLOR_DIM)),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("page {}/{}", app.paginator.current, app.paginator.total_pages),
                Style::default().fg(COLOR_DIM),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{} images", app.images.len()),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{} events", app.analytics.len()),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
    ];

    let info = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Right);
    frame.render_widget(info, area);
}

// ============================================================================
// Main Content Area
// ============================================================================

fn render_main_content(frame: &mut Frame, area: Rect, app: &App) {
    if app.show_log {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Gallery list
                Constraint::Percentage(40), // Analytics log
            ])
            .split(area);

        render_gallery_panel(frame, content_chunks[0], app);
        render_analytics_panel(frame, content_chunks[1], app);
    } else {
        render_gallery_panel(frame, area, app);
    }
}

// ============================================================================
// Gallery Panel
// ============================================================================

fn render_gallery_panel(frame: &mut Frame, area: Rect, app: &App) {
    let gallery_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(gallery_block, area);

    let inner = inner_rect(area, 1);

    let mut lines = vec![
        Line::from(Span::styled(
            "◈ GALLERY",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "─────────────────────────────",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    if let Some(error) = &app.error {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", error),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        )));
    } else if app.loading {
        let frame_idx = (app.tick_count / 4) as usize % SPINNER.len();
        lines.push(Line::from(vec![
            Span::styled(SPINNER[frame_idx], Style::default().fg(COLOR_ACTIVE)),
            Span::styled(" Loading images...", Style::default().fg(COLOR_DIM)),
        ]));
    } else if app.images.is_empty() {
        lines.push(Line::from(Span::styled(
            "No images on this page",
            Style::default().fg(COLOR_DIM),
        )));
    } else {
        let visible = inner.height.saturating_sub(2) as usize;
        // Keep the selection in view
        let offset = app.selected.saturating_sub(visible.saturating_sub(1));
        for (i, image) in app.images.iter().enumerate().skip(offset).take(visible) {
            let is_selected = i == app.selected;
            let marker = if is_selected { "▶ " } else { "▸ " };
            let marker_style = if is_selected {
                Style::default().fg(COLOR_HEADER)
            } else {
                Style::default().fg(COLOR_DIM)
            };

            lines.push(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(format!("#{:<5}", image.id), Style::default().fg(COLOR_DIM)),
                Span::styled(
                    format!("{:<24}", truncate(&image.author, 24)),
                    if is_selected {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
                Span::styled(
                    format!("{:>10}  ", image.dimensions()),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(
                    truncate(&image.download_url, inner.width.saturating_sub(45) as usize),
                    Style::default().fg(COLOR_DIM),
                ),
            ]));
        }
    }

    let gallery = Paragraph::new(lines);
    frame.render_widget(gallery, inner);
}

/// Truncate a string for display, adding "…" if truncated.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

// ============================================================================
// Analytics Panel
// ============================================================================

fn render_analytics_panel(frame: &mut Frame, area: Rect, app: &App) {
    let log_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(log_block, area);

    let inner = inner_rect(area, 1);

    let mut lines = vec![
        Line::from(Span::styled(
            "◆ ANALYTICS LOG",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "─────────────────────────────",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    // Newest first, exactly as stored
    for event in app.analytics.events() {
        let time = event.timestamp.format("%H:%M:%S").to_string();
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", time), Style::default().fg(COLOR_DIM)),
            Span::styled(
                event.name.clone(),
                Style::default()
                    .fg(COLOR_ACTIVE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for json_line in pretty_print_json(Some(&event.params)).lines() {
            lines.push(Line::from(Span::styled(
                format!("  {}", json_line),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    let log = Paragraph::new(lines).scroll((app.log_scroll, 0));
    frame.render_widget(log, inner);
}

// ============================================================================
// Footer: Pagination Bar + Keybind Hints
// ============================================================================

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    render_pagination_bar(frame, footer_chunks[0], app);
    render_hints(frame, footer_chunks[1]);
}

fn render_pagination_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        if app.paginator.previous().is_some() {
            "◀ Prev  "
        } else {
            "  Prev  "
        },
        Style::default().fg(if app.paginator.previous().is_some() {
            COLOR_ACCENT
        } else {
            COLOR_DIM
        }),
    )];

    for page in app.paginator.page_numbers() {
        if page == app.paginator.current {
            spans.push(Span::styled(
                format!("[{}] ", page),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {}  ", page),
                Style::default().fg(COLOR_DIM),
            ));
        }
    }

    spans.push(Span::styled(
        if app.paginator.next().is_some() {
            "  Next ▶"
        } else {
            "  Next  "
        },
        Style::default().fg(if app.paginator.next().is_some() {
            COLOR_ACCENT
        } else {
            COLOR_DIM
        }),
    ));

    let bar = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(bar, area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        "←/→ page  1-9,0 select  ↑/↓ image  [/] scroll log  a log  q quit",
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(hints, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("a very long author name", 10), "a very lo…");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("exactly10c", 10), "exactly10c");
    }
}
