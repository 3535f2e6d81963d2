// Reusable UI components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    pub fn board_with_stats(active: usize, finished: usize) -> Self {
        let stats_text = format!("Active: {}, Finished: {}  |  ", active, finished);

        let mut spans = vec![Span::raw(stats_text)];

        let controls = [
            ("[Tab]", " Next Field"),
            ("[Enter]", " Add"),
            ("[Esc]", " Back to Title"),
            ("[Ctrl+Q]", " Quit"),
        ];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

pub fn render_button(label: &str, hotkey: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let style = if focused {
        Style::default().bg(Color::Blue).fg(Color::White).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let text = Line::from(vec![
        Span::raw("["),
        Span::styled(hotkey, Style::default().fg(Color::Yellow).bold()),
        Span::raw("]"),
        Span::raw(label),
    ])
    .style(style);

    let mut centered_area = area;
    let text_width = label.len() as u16 + hotkey.len() as u16 + 2; // [hotkey] + label
    if area.width > text_width {
        let padding = (area.width - text_width) / 2;
        centered_area.x += padding;
        centered_area.width = text_width;
    }

    buf.set_line(centered_area.x, centered_area.y, &text, centered_area.width);
}

/// Rect of `width` x `height` centered in `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
