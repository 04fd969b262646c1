//! Action menu widget for the main view.

use crate::app::MenuItem;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Widget for displaying the main action menu
pub struct MenuWidget<'a> {
    items: &'a [MenuItem],
    selected_index: usize,
}

impl<'a> MenuWidget<'a> {
    /// Create a new menu widget
    pub fn new(items: &'a [MenuItem], selected_index: usize) -> Self {
        Self {
            items,
            selected_index,
        }
    }
}

impl Widget for MenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let style = if idx == self.selected_index {
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                let line = Line::from(vec![
                    Span::styled(
                        format!("  {:3} ", item.shortcut_hint()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(format!("{:24}", item.label()), style),
                    Span::styled(item.description(), Style::default().fg(Color::DarkGray)),
                ]);
                ListItem::new(line).style(style)
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(self.selected_index));

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Actions "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_renders_all_items() {
        let items = MenuItem::ALL;
        let widget = MenuWidget::new(&items, 0);

        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 10));
        widget.render(Rect::new(0, 0, 60, 10), &mut buf);

        let rendered = buf
            .content
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect::<String>();
        assert!(rendered.contains("Install dependencies"));
        assert!(rendered.contains("Quit"));
    }
}
