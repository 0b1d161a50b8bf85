//! Overlay rendering for prompts and results

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::colors;

const MODAL_WIDTH_PERCENT: u16 = 70;

/// Create a centered rect with percentage width and absolute height
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw `lines` in a bordered box centered on the screen
fn render_modal(frame: &mut Frame<'_>, title: &str, border: Color, lines: Vec<Line<'_>>) {
    let screen = frame.area();
    let inner_width = (usize::from(screen.width) * usize::from(MODAL_WIDTH_PERCENT) / 100)
        .saturating_sub(2)
        .max(1);

    // Height: wrapped content rows + 2 for borders
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(inner_width).max(1))
        .sum();
    let height = u16::try_from(rows + 2).unwrap_or(u16::MAX);
    let area = centered_rect_absolute(MODAL_WIDTH_PERCENT, height, screen);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .style(Style::default().bg(colors::MODAL_BG))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn yes_no_line(yes: &'static str, no: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "[Y]",
            Style::default()
                .fg(colors::ACCENT_POSITIVE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(yes, Style::default().fg(colors::TEXT_PRIMARY)),
        Span::styled(
            "[N]",
            Style::default()
                .fg(colors::ACCENT_NEGATIVE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(no, Style::default().fg(colors::TEXT_PRIMARY)),
    ])
}

fn bullet(text: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        format!("  • {}", text.into()),
        Style::default().fg(color),
    ))
}

/// Ask whether to delete the selected branches
pub fn render_confirm_delete_overlay(frame: &mut Frame<'_>, app: &App) {
    let selected = app.selected_branches();

    let mut lines = vec![
        Line::from(Span::styled(
            "Are you sure you want to delete these branches?",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        selected
            .iter()
            .map(|branch| bullet(*branch, colors::ACCENT_WARNING)),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Total: {} branch(es)", selected.len()),
        Style::default().fg(colors::TEXT_DIM),
    )));
    lines.push(Line::from(""));
    lines.push(yes_no_line("es  ", "o"));

    render_modal(frame, "Confirm", colors::MODAL_BORDER_WARNING, lines);
}

/// Shown while a deletion pass runs
pub fn render_deleting_overlay(frame: &mut Frame<'_>) {
    let lines = vec![
        Line::from(Span::styled(
            "Deleting branches...",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Please wait...",
            Style::default().fg(colors::TEXT_DIM),
        )),
    ];
    render_modal(frame, "Working", colors::BORDER, lines);
}

/// Ask whether to force delete branches refused as unmerged
pub fn render_force_confirm_overlay(frame: &mut Frame<'_>, app: &App) {
    let unmerged = app.outcome().unmerged();

    let mut lines = vec![
        Line::from(Span::styled(
            "⚠ Warning: Unmerged Branches Detected",
            Style::default()
                .fg(colors::ACCENT_NEGATIVE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The following branches have unmerged changes:",
            Style::default().fg(colors::TEXT_PRIMARY),
        )),
        Line::from(""),
    ];
    for (branch, message) in unmerged {
        lines.push(bullet(branch.clone(), colors::ACCENT_WARNING));
        lines.push(Line::from(Span::styled(
            format!("    {message}"),
            Style::default().fg(colors::TEXT_MUTED),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Force delete {} branch(es)?", unmerged.len()),
        Style::default().fg(colors::ACCENT_WARNING),
    )));
    lines.push(Line::from(Span::styled(
        "This action cannot be undone!",
        Style::default()
            .fg(colors::ACCENT_NEGATIVE)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(yes_no_line("es, force delete  ", "o, skip them"));

    render_modal(frame, "Force Delete", colors::MODAL_BORDER_ERROR, lines);
}

/// Final tally
pub fn render_done_overlay(frame: &mut Frame<'_>, app: &App) {
    let outcome = app.outcome();
    let mut lines = Vec::new();

    let deleted = outcome.deleted_count();
    if deleted > 0 {
        lines.push(Line::from(Span::styled(
            format!("✓ Successfully deleted {deleted} branch(es)"),
            Style::default()
                .fg(colors::ACCENT_POSITIVE)
                .add_modifier(Modifier::BOLD),
        )));
    }

    if !outcome.unmerged().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Skipped {} unmerged branch(es):", outcome.unmerged().len()),
            Style::default().fg(colors::ACCENT_WARNING),
        )));
        for branch in outcome.unmerged().keys() {
            lines.push(bullet(branch.clone(), colors::ACCENT_WARNING));
        }
    }

    if !outcome.failed().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("✗ Failed to delete {} branch(es):", outcome.failed().len()),
            Style::default()
                .fg(colors::ACCENT_NEGATIVE)
                .add_modifier(Modifier::BOLD),
        )));
        for (branch, message) in outcome.failed() {
            lines.push(bullet(format!("{branch}: {message}"), colors::ACCENT_NEGATIVE));
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No branches were deleted.",
            Style::default().fg(colors::TEXT_PRIMARY),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to exit.",
        Style::default().fg(colors::TEXT_DIM),
    )));

    render_modal(frame, "Deletion Complete", colors::MODAL_BORDER_SUCCESS, lines);
}
