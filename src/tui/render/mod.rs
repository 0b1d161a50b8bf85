//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - `modals`: Prompt and result overlays drawn over the branch list

mod colors;
mod modals;

use crate::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_branch_list(frame, app, chunks[0]);
    render_hint_bar(frame, app, chunks[1]);

    match app.mode {
        Mode::Selection => {}
        Mode::Confirmation => modals::render_confirm_delete_overlay(frame, app),
        Mode::Deleting(_) => modals::render_deleting_overlay(frame),
        Mode::ForceConfirmation => modals::render_force_confirm_overlay(frame, app),
        Mode::Done => modals::render_done_overlay(frame, app),
    }
}

/// Render the selectable branch list
fn render_branch_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(
        " gelete - Interactive Branch Deletion ({} selected) ",
        app.selected_count()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.mode == Mode::Selection {
            colors::SELECTED
        } else {
            colors::BORDER
        }))
        .style(Style::default().bg(colors::SURFACE));

    if app.branches().is_empty() {
        let text = vec![
            Line::from(Span::styled(
                "No branches to delete.",
                Style::default().fg(colors::TEXT_PRIMARY),
            )),
            Line::from(Span::styled(
                "(The current branch is excluded from the list)",
                Style::default().fg(colors::TEXT_DIM),
            )),
        ];
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let items: Vec<ListItem<'_>> = app
        .branches()
        .iter()
        .enumerate()
        .map(|(i, branch)| branch_list_item(app, i, branch))
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(Some(app.cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn branch_list_item<'a>(app: &App, index: usize, branch: &'a str) -> ListItem<'a> {
    let is_cursor = index == app.cursor();
    let is_selected = app.is_selected(branch);

    let cursor = if is_cursor { "> " } else { "  " };
    let checkbox = if is_selected { "[✓] " } else { "[ ] " };
    let name_style = if is_selected {
        Style::default()
            .fg(colors::ACCENT_POSITIVE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_PRIMARY)
    };

    let mut spans = vec![
        Span::styled(cursor, Style::default().fg(colors::CURSOR)),
        Span::styled(checkbox, name_style),
        Span::styled(branch, name_style),
    ];

    if let Some(worktree) = app.worktree_for(branch) {
        let tag = if worktree.locked {
            "  (worktree, locked)"
        } else {
            "  (worktree)"
        };
        spans.push(Span::styled(tag, Style::default().fg(colors::ACCENT_WARNING)));
    }

    ListItem::new(Line::from(spans))
}

/// Render the key hint line below the list
fn render_hint_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match app.mode {
        Mode::Selection => app.config.keys.hints(),
        Mode::Confirmation => "y: confirm • n: cancel".to_string(),
        Mode::ForceConfirmation => "y: force delete • n: skip these branches".to_string(),
        Mode::Deleting(_) => "Please wait...".to_string(),
        Mode::Done => "Press any key to exit.".to_string(),
    };
    let paragraph = Paragraph::new(Span::styled(hints, Style::default().fg(colors::TEXT_MUTED)));
    frame.render_widget(paragraph, area);
}
