//! Output panel widget for displaying captured command output.

use crate::domain::{CommandResult, CommandRun, ExecutionState};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};
use std::fmt;

/// Maximum number of lines to keep in the output buffer
const MAX_OUTPUT_LINES: usize = 1000;

/// Widget for displaying package manager command output
pub struct OutputPanelWidget<'a> {
    /// Output lines to display
    lines: &'a [String],
    /// Command being executed (if any)
    run: Option<&'a CommandRun>,
    /// Lines came from stderr (failed command)
    from_stderr: bool,
    /// Scroll offset
    scroll_offset: usize,
    /// Is auto-scroll enabled
    auto_scroll: bool,
}

impl<'a> OutputPanelWidget<'a> {
    /// Create a new output panel widget
    pub fn new(buffer: &'a OutputBuffer, run: Option<&'a CommandRun>) -> Self {
        Self {
            lines: buffer.lines(),
            run,
            from_stderr: buffer.is_from_stderr(),
            scroll_offset: buffer.scroll_offset(),
            auto_scroll: buffer.is_auto_scroll(),
        }
    }

    /// Get the title based on command state
    fn title(&self) -> String {
        match self.run {
            Some(run) => {
                let state_name = match &run.state {
                    ExecutionState::Pending => "Pending",
                    ExecutionState::Running { .. } => "Running",
                    ExecutionState::Completed { success: true, .. } => "Completed",
                    ExecutionState::Completed { success: false, .. } => "Failed",
                };
                format!(
                    " {} {} - {} ",
                    run.state.indicator(),
                    run.command.display_name(),
                    state_name
                )
            }
            None => " Output ".to_string(),
        }
    }

    /// Get the border style based on command state
    fn border_style(&self) -> Style {
        match self.run.map(|r| &r.state) {
            Some(ExecutionState::Running { .. }) => Style::default().fg(Color::Yellow),
            Some(ExecutionState::Completed { success: true, .. }) => {
                Style::default().fg(Color::Green)
            }
            Some(ExecutionState::Completed { success: false, .. }) => {
                Style::default().fg(Color::Red)
            }
            _ => Style::default(),
        }
    }

    /// Format output lines for display
    fn format_lines(&self) -> Vec<Line<'a>> {
        let style = if self.from_stderr {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        self.lines
            .iter()
            .map(|line| Line::from(Span::styled(line.as_str(), style)))
            .collect()
    }
}

impl Widget for OutputPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.format_lines();
        let total_lines = lines.len();

        // Calculate scroll position
        let scroll = if self.auto_scroll && total_lines > area.height as usize {
            total_lines.saturating_sub(area.height.saturating_sub(2) as usize)
        } else {
            self.scroll_offset
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style())
                    .title(self.title()),
            )
            .wrap(Wrap { trim: false })
            .scroll((scroll as u16, 0));

        paragraph.render(area, buf);

        // Render scrollbar if there are more lines than visible
        if total_lines > area.height.saturating_sub(2) as usize {
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(total_lines)
                .position(scroll)
                .viewport_content_length(area.height.saturating_sub(2) as usize);

            let scrollbar_area = Rect {
                x: area.x + area.width - 1,
                y: area.y + 1,
                width: 1,
                height: area.height.saturating_sub(2),
            };

            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}

/// Buffer holding the output of the current command
#[derive(Debug, Default)]
pub struct OutputBuffer {
    /// Output lines
    lines: Vec<String>,
    /// Lines came from stderr (failed command)
    from_stderr: bool,
    /// Scroll offset (for manual scrolling)
    scroll_offset: usize,
    /// Is auto-scroll enabled
    auto_scroll: bool,
}

impl OutputBuffer {
    /// Create a new output buffer
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            from_stderr: false,
            scroll_offset: 0,
            auto_scroll: true,
        }
    }

    /// Start a new command (clear buffer and reset scroll)
    pub fn start(&mut self) {
        self.lines.clear();
        self.from_stderr = false;
        self.scroll_offset = 0;
        self.auto_scroll = true;
    }

    /// Fill the buffer from a finished command result.
    ///
    /// Only the tail of very large outputs is kept.
    pub fn set_result(&mut self, result: &CommandResult) {
        self.from_stderr = !result.success;
        self.lines = result.output.lines().map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::from("(no output)"));
        }
        if self.lines.len() > MAX_OUTPUT_LINES {
            self.lines.drain(..self.lines.len() - MAX_OUTPUT_LINES);
        }
    }

    /// Push a single informational line
    pub fn push(&mut self, content: String) {
        self.lines.push(content);
        if self.lines.len() > MAX_OUTPUT_LINES {
            self.lines.remove(0);
            if self.scroll_offset > 0 {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
        }
    }

    /// Get all lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get line count
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the buffered output came from stderr
    pub fn is_from_stderr(&self) -> bool {
        self.from_stderr
    }

    /// Scroll up
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
        self.auto_scroll = false;
    }

    /// Scroll down
    pub fn scroll_down(&mut self, amount: usize, visible_height: usize) {
        let max_scroll = self.lines.len().saturating_sub(visible_height);
        self.scroll_offset = (self.scroll_offset + amount).min(max_scroll);

        // Re-enable auto-scroll if at bottom
        if self.scroll_offset >= max_scroll {
            self.auto_scroll = true;
        }
    }

    /// Jump to bottom and enable auto-scroll
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
        self.auto_scroll = true;
    }

    /// Get scroll offset
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Check if auto-scroll is enabled
    pub fn is_auto_scroll(&self) -> bool {
        self.auto_scroll
    }
}

impl fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_result_success() {
        let mut buffer = OutputBuffer::new();
        buffer.start();

        buffer.set_result(&CommandResult::ok("added 3 packages\naudited 120 packages"));
        assert_eq!(buffer.len(), 2);
        assert!(!buffer.is_from_stderr());
    }

    #[test]
    fn test_set_result_failure_marks_stderr() {
        let mut buffer = OutputBuffer::new();
        buffer.start();

        buffer.set_result(&CommandResult::failed("npm ERR! missing script: dev"));
        assert!(buffer.is_from_stderr());
        assert_eq!(buffer.lines()[0], "npm ERR! missing script: dev");
    }

    #[test]
    fn test_set_result_empty_output_placeholder() {
        let mut buffer = OutputBuffer::new();
        buffer.start();

        buffer.set_result(&CommandResult::ok(""));
        assert_eq!(buffer.lines(), ["(no output)"]);
    }

    #[test]
    fn test_output_buffer_scroll() {
        let mut buffer = OutputBuffer::new();
        buffer.start();

        for i in 0..100 {
            buffer.push(format!("Line {}", i));
        }

        assert!(buffer.is_auto_scroll());

        buffer.scroll_up(10);
        assert!(!buffer.is_auto_scroll());

        buffer.scroll_to_bottom();
        assert!(buffer.is_auto_scroll());
    }

    #[test]
    fn test_output_buffer_max_lines() {
        let mut buffer = OutputBuffer::new();
        buffer.start();

        let big = (0..MAX_OUTPUT_LINES + 100)
            .map(|i| format!("Line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        buffer.set_result(&CommandResult::ok(big));

        assert_eq!(buffer.len(), MAX_OUTPUT_LINES);
        // The head is dropped, the tail survives
        assert_eq!(buffer.lines()[0], "Line 100");
    }
}
