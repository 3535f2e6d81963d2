// Status-filtered project list that follows the store

use crate::engine::{Project, ProjectStatus, ProjectStore};
use crate::ui::component::Component;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    pub fn status(&self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        project.status == self.status()
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status().label().to_uppercase())
    }
}

#[derive(Debug, Default)]
struct ListContent {
    assigned: Vec<Project>,
    items: Vec<String>,
    renders: usize,
}

impl ListContent {
    // Full rebuild from the assigned snapshot; nothing is diffed
    fn render_projects(&mut self) {
        self.items.clear();
        for project in &self.assigned {
            self.items.push(project.title.clone());
        }
        self.renders += 1;
    }
}

/// One of the board's two project lists.
///
/// The listener registered in `configure` shares the content with the view,
/// so notifications replace the snapshot the next frame draws.
pub struct ListView {
    kind: ListKind,
    content: Rc<RefCell<ListContent>>,
}

impl ListView {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            content: Rc::new(RefCell::new(ListContent::default())),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Latest filtered snapshot
    pub fn assigned_projects(&self) -> Ref<'_, [Project]> {
        Ref::map(self.content.borrow(), |c| c.assigned.as_slice())
    }

    /// Entries as last rendered, one title per line
    pub fn rendered_items(&self) -> Vec<String> {
        self.content.borrow().items.clone()
    }

    /// Number of full re-renders triggered by notifications
    pub fn render_count(&self) -> usize {
        self.content.borrow().renders
    }
}

impl Component for ListView {
    fn configure(&mut self, store: &mut ProjectStore) {
        let kind = self.kind;
        let content = Rc::clone(&self.content);

        store.add_listener(move |projects: Vec<Project>| {
            let relevant: Vec<Project> = projects.into_iter().filter(|p| kind.matches(p)).collect();

            let mut content = content.borrow_mut();
            content.assigned = relevant;
            content.render_projects();
            debug!(list = %kind.status(), shown = content.items.len(), "list re-rendered");
        });
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let content = self.content.borrow();
        let items: Vec<ListItem> = content
            .items
            .iter()
            .map(|title| ListItem::new(title.as_str()))
            .collect();

        let border_color = match self.kind {
            ListKind::Active => Color::Green,
            ListKind::Finished => Color::Blue,
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} ", self.kind.heading()))
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        );

        frame.render_widget(list, area);
    }
}
