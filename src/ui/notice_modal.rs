// Blocking notice modal (shown for rejected submissions)

use crate::ui::components::centered_rect;
use crate::ui::state::NoticeState;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct NoticeModal;

impl NoticeModal {
    pub fn render(frame: &mut Frame, state: &NoticeState) {
        let modal_area = centered_rect(frame.area(), 40, 7);

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Notice ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                state.message.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )]),
        ];
        if let Some(detail) = &state.detail {
            lines.push(Line::from(vec![Span::styled(
                detail.clone(),
                Style::default().fg(Color::Gray),
            )]));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(
                "[Enter]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" OK"),
        ]));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));

        frame.render_widget(paragraph, inner);
    }
}
