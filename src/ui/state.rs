// Application state: the board (store + components) and modal overlays

use crate::config::Config;
use crate::engine::{ProjectId, ProjectStatus, ProjectStore};
use crate::ui::component::{Component, attach, mount};
use crate::ui::components::Footer;
use crate::ui::constants::INVALID_INPUT_NOTICE;
use crate::ui::form::{FormField, InputForm, SubmitError};
use crate::ui::list_view::{ListKind, ListView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

/// State for the blocking notice modal
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeState {
    pub message: String,
    pub detail: Option<String>,
}

impl NoticeState {
    pub fn invalid_input(failed: &[FormField]) -> Self {
        let detail = if failed.is_empty() {
            None
        } else {
            let names: Vec<&str> = failed.iter().map(|f| f.label()).collect();
            Some(format!("Check: {}", names.join(", ")))
        };

        Self {
            message: INVALID_INPUT_NOTICE.to_string(),
            detail,
        }
    }
}

/// State for the quit confirmation modal
#[derive(Debug, Clone, PartialEq)]
pub struct QuitConfirmationState {
    /// Number of form fields holding text
    pub filled_fields: usize,
}

/// Composition root: owns the store and every component wired to it.
pub struct Board {
    pub store: ProjectStore,
    pub form: InputForm,
    pub active_list: ListView,
    pub finished_list: ListView,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let mut store = ProjectStore::new();
        let form = mount(InputForm::new(), &mut store);
        let active_list = mount(ListView::new(ListKind::Active), &mut store);
        let finished_list = mount(ListView::new(ListKind::Finished), &mut store);

        Self {
            store,
            form,
            active_list,
            finished_list,
        }
    }

    /// Run the form's submission against the board's store
    pub fn submit(&mut self) -> Result<ProjectId, SubmitError> {
        self.form.submit(&mut self.store)
    }

    pub fn count(&self, status: ProjectStatus) -> usize {
        self.store
            .projects()
            .iter()
            .filter(|p| p.status == status)
            .count()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut slots: Vec<&dyn Component> = Vec::new();
        attach(&mut slots, &self.active_list);
        attach(&mut slots, &self.finished_list);
        attach(&mut slots, &self.form);

        let mut constraints: Vec<Constraint> = slots.iter().map(|c| c.constraint()).collect();
        constraints.push(Constraint::Length(1)); // Footer

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (component, chunk) in slots.iter().zip(chunks.iter()) {
            component.render_content(frame, *chunk);
        }

        if let Some(footer_area) = chunks.last() {
            Footer::board_with_stats(
                self.count(ProjectStatus::Active),
                self.count(ProjectStatus::Finished),
            )
            .render(*footer_area, frame.buffer_mut());
        }
    }
}

pub struct AppState {
    pub board: Board,
    pub notice: Option<NoticeState>,
    pub quit_confirmation: Option<QuitConfirmationState>,
    pub confirm_quit: bool,
    pub viewport: Rect,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            notice: None,            // Opened when a submission is rejected
            quit_confirmation: None, // Opened when quitting with text in the form
            confirm_quit: true,
            viewport: Rect::default(),
        }
    }
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            confirm_quit: config.ui.confirm_quit,
            ..Self::default()
        }
    }

    /// Submit the form; a rejection opens the notice modal
    pub fn submit_form(&mut self) {
        if let Err(SubmitError::InvalidInput { failed }) = self.board.submit() {
            self.notice = Some(NoticeState::invalid_input(&failed));
        }
    }

    pub fn filled_fields(&self) -> usize {
        self.board.form.filled_fields()
    }
}
