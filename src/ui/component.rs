// Shared shape of the board's building blocks

use crate::engine::ProjectStore;
use ratatui::{Frame, layout::Constraint, layout::Rect};

/// Where a component lands when attached to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Start,
    End,
}

pub trait Component {
    /// Wire the component to the store. Called exactly once, by [`mount`].
    fn configure(&mut self, store: &mut ProjectStore);

    fn render_content(&self, frame: &mut Frame, area: Rect);

    fn placement(&self) -> Placement {
        Placement::End
    }

    /// Vertical space requested from the board layout
    fn constraint(&self) -> Constraint {
        Constraint::Min(3)
    }
}

/// Configure a freshly built component against the store.
pub fn mount<C: Component>(mut component: C, store: &mut ProjectStore) -> C {
    component.configure(store);
    component
}

/// Insert a component into the ordered slot list according to its placement.
pub fn attach<'a>(slots: &mut Vec<&'a dyn Component>, component: &'a dyn Component) {
    match component.placement() {
        Placement::Start => slots.insert(0, component),
        Placement::End => slots.push(component),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Probe {
        placement: Placement,
        configured: Cell<u32>,
    }

    impl Component for Probe {
        fn configure(&mut self, _store: &mut ProjectStore) {
            self.configured.set(self.configured.get() + 1);
        }

        fn render_content(&self, _frame: &mut Frame, _area: Rect) {}

        fn placement(&self) -> Placement {
            self.placement
        }
    }

    fn probe(placement: Placement) -> Probe {
        Probe {
            placement,
            configured: Cell::new(0),
        }
    }

    #[test]
    fn test_mount_configures_once() {
        let mut store = ProjectStore::new();
        let mounted = mount(probe(Placement::End), &mut store);
        assert_eq!(mounted.configured.get(), 1);
    }

    #[test]
    fn test_attach_orders_by_placement() {
        let first = probe(Placement::End);
        let second = probe(Placement::End);
        let head = probe(Placement::Start);

        let mut slots: Vec<&dyn Component> = Vec::new();
        attach(&mut slots, &first);
        attach(&mut slots, &head);
        attach(&mut slots, &second);

        let expected: [*const Probe; 3] = [&head, &first, &second];
        assert_eq!(slots.len(), 3);
        for (slot, want) in slots.iter().zip(expected) {
            assert!(std::ptr::addr_eq(*slot, want));
        }
    }
}
