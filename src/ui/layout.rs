//! Main layout rendering for the TUI.

use crate::app::{App, AppView, MenuItem};
use crate::ui::widgets::help::HelpWidget;
use crate::ui::widgets::menu::MenuWidget;
use crate::ui::widgets::output_panel::OutputPanelWidget;
use crate::ui::widgets::text_input::NewComponentDialog;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Draw the main application UI
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.view {
        AppView::Menu => draw_menu(frame, app, area),
        AppView::NewComponent => draw_new_component(frame, app, area),
        AppView::CommandOutput => draw_command_output(frame, app, area),
        AppView::Help => draw_help(frame, app, area),
    }

    // Draw error message overlay if present
    if let Some(ref error) = app.error_message {
        draw_error_overlay(frame, error, area);
    }

    // Draw status message (non-blocking) if present
    if let Some(ref msg) = app.status_message {
        draw_status_message(frame, msg, area);
    }
}

/// Draw a status message at the bottom of the screen
fn draw_status_message(frame: &mut Frame, message: &str, area: Rect) {
    // Create a small area at the bottom center
    let msg_area = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(4),
        width: area.width.saturating_sub(4).min(message.len() as u16 + 4),
        height: 3,
    };

    frame.render_widget(Clear, msg_area);

    let status = Paragraph::new(message)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(status, msg_area);
}

/// Draw the main menu view
fn draw_menu(frame: &mut Frame, app: &App, area: Rect) {
    // Create layout: header, project info, main content, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Project info
            Constraint::Min(0),    // Menu
            Constraint::Length(3), // Footer
        ])
        .split(area);

    // Header
    let header = Paragraph::new("scaffold-tui - React + TypeScript Project Helper")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Project info with soft-fallback warning
    let mut info_lines = vec![Line::from(vec![
        Span::styled("Project: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.project.display_name(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", app.project.root_path.display()),
            Style::default().fg(Color::DarkGray),
        ),
    ])];
    if app.manifest_missing {
        info_lines.push(Line::from(Span::styled(
            "No package.json found in this directory or any ancestor - using the current directory",
            Style::default().fg(Color::Yellow),
        )));
    }
    frame.render_widget(Paragraph::new(info_lines), chunks[1]);

    // Menu
    let menu = MenuWidget::new(&MenuItem::ALL, app.selected_menu_index);
    frame.render_widget(menu, chunks[2]);

    // Footer with keybindings
    let footer_text =
        " j/k: Navigate | Enter: Select | i: Install | n: New component | d: Dev server | q: Quit | ?: Help ";
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);
}

/// Draw the new component dialog over the menu
fn draw_new_component(frame: &mut Frame, app: &App, area: Rect) {
    // Draw the menu in the background
    draw_menu(frame, app, area);

    // Draw the dialog popup
    let popup_area = centered_rect(60, 40, area);

    let dialog = NewComponentDialog::new(&app.new_component_input)
        .error(app.new_component_error.as_deref());
    frame.render_widget(dialog, popup_area);
}

/// Draw command output view with captured output
fn draw_command_output(frame: &mut Frame, app: &App, area: Rect) {
    // Create layout: header, output, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with command info
            Constraint::Min(0),    // Output panel
            Constraint::Length(3), // Footer with keybindings
        ])
        .split(area);

    // Header with command info
    let header_text = if let Some(ref run) = app.active_run {
        format!("{} {}", run.state.indicator(), run.command.display_name())
    } else {
        "No command".to_string()
    };

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Output panel
    let output_widget = OutputPanelWidget::new(&app.output_buffer, app.active_run.as_ref());
    frame.render_widget(output_widget, chunks[1]);

    // Footer with keybindings
    let footer_text = if app.is_command_running() {
        " Waiting for the command to finish... | j/k: Scroll | G: Bottom "
    } else {
        " q/Esc: Back | j/k: Scroll | G: Bottom "
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);
}

/// Draw help view showing all keybindings
fn draw_help(frame: &mut Frame, app: &App, area: Rect) {
    // The help widget updates state dimensions internally, but draw only
    // has an immutable app reference, so render with a clone of the state.
    let mut help_state = app.help_view_state.clone();
    let help_widget = HelpWidget::new(&mut help_state);
    frame.render_widget(help_widget, area);
}

/// Draw error overlay
fn draw_error_overlay(frame: &mut Frame, error: &str, area: Rect) {
    // Create a centered popup area
    let popup_area = centered_rect(60, 20, area);

    // Clear the area
    frame.render_widget(Clear, popup_area);

    let error_widget = Paragraph::new(error)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Error"),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(error_widget, popup_area);
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
