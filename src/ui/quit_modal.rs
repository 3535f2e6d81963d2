// Quit confirmation modal

use crate::ui::components::centered_rect;
use crate::ui::state::QuitConfirmationState;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct QuitModal;

impl QuitModal {
    pub fn render(frame: &mut Frame, state: &QuitConfirmationState) {
        let modal_area = centered_rect(frame.area(), 50, 7);

        // Clear background
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Quit Confirmation ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let field_text = if state.filled_fields == 1 {
            "1 form field holds".to_string()
        } else {
            format!("{} form fields hold", state.filled_fields)
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                format!("{} unsubmitted text.", field_text),
                Style::default().fg(Color::White),
            )]),
            Line::from(vec![Span::styled(
                "Quitting will discard it.",
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "[Y]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Quit   "),
                Span::styled(
                    "[N]",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));

        frame.render_widget(paragraph, inner);
    }
}
