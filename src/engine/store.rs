//! In-memory project store with synchronous change listeners.

use super::project::{Project, ProjectId};
use tracing::{debug, info};

type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Ordered set of callbacks that receive a full snapshot on every change.
///
/// Registering the same logic twice registers it twice; callbacks run in
/// registration order.
pub struct Listeners<T> {
    callbacks: Vec<Listener<T>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }
}

impl<T: Clone> Listeners<T> {
    pub fn add(&mut self, callback: impl FnMut(Vec<T>) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Hand each callback its own copy of `items`
    pub fn notify(&mut self, items: &[T]) {
        for callback in self.callbacks.iter_mut() {
            callback(items.to_vec());
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

/// Sole owner of every project created during the session.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Listeners<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for future additions. It is not called now.
    pub fn add_listener(&mut self, callback: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.add(callback);
        debug!(listeners = self.listeners.len(), "listener registered");
    }

    /// Append a new active project and notify every listener.
    ///
    /// Inputs are trusted; callers validate before adding.
    pub fn add_project(&mut self, title: &str, description: &str, people: u32) -> &Project {
        let project = Project::new(title.to_string(), description.to_string(), people);
        info!(id = %project.id, title = %project.title, people, "project added");
        self.projects.push(project);

        debug!(
            listeners = self.listeners.len(),
            projects = self.projects.len(),
            "notifying listeners"
        );
        self.listeners.notify(&self.projects);

        &self.projects[self.projects.len() - 1]
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
