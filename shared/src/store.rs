use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::project::Project;

pub type Listener = Rc<dyn Fn(Vec<Project>)>;

/// In-memory list of projects plus the callbacks interested in changes to it.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

thread_local! {
    static INSTANCE: RefCell<Option<StoreHandle>> = RefCell::new(None);
}

/// Shared handle to a [`ProjectStore`]. Clones point at the same store.
#[derive(Clone, Default)]
pub struct StoreHandle(Rc<RefCell<ProjectStore>>);

impl StoreHandle {
    /// A fresh, unshared store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store of the current thread, created on first use.
    pub fn instance() -> Self {
        INSTANCE.with(|instance| {
            instance
                .borrow_mut()
                .get_or_insert_with(|| {
                    debug!("creating project store");
                    StoreHandle::new()
                })
                .clone()
        })
    }

    pub fn ptr_eq(&self, other: &StoreHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Appends a new active project and notifies every listener, in the
    /// order they subscribed, with a copy of the full list.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Project {
        let project = Project::new(title.into(), description.into(), people);

        // release the borrow before calling out, listeners may read the store
        let (snapshot, listeners) = {
            let mut store = self.0.borrow_mut();
            store.projects.push(project.clone());
            (store.projects.clone(), store.listeners.clone())
        };

        debug!(
            "added project {} ({} projects, notifying {} listeners)",
            project.id(),
            snapshot.len(),
            listeners.len()
        );

        for listener in &listeners {
            listener(snapshot.clone());
        }

        project
    }

    /// Registers `listener` for all future changes. Current state is not
    /// replayed.
    pub fn add_listener<F>(&self, listener: F)
    where
        F: Fn(Vec<Project>) + 'static,
    {
        let mut store = self.0.borrow_mut();
        store.listeners.push(Rc::new(listener));
        debug!("listener registered ({} total)", store.listeners.len());
    }

    pub fn projects(&self) -> Vec<Project> {
        self.0.borrow().projects.clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.0.borrow().listeners.len()
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0.borrow(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectStatus;

    #[test]
    fn add_returns_the_stored_project() {
        let store = StoreHandle::new();
        let project = store.add_project("T", "Desc text", 3);

        assert_eq!(store.projects(), vec![project.clone()]);
        assert_eq!(project.title(), "T");
        assert_eq!(project.description(), "Desc text");
        assert_eq!(project.people(), 3);
        assert_eq!(project.status(), ProjectStatus::Active);
    }

    #[test]
    fn listener_may_read_the_store_while_notified() {
        let store = StoreHandle::new();
        let seen = Rc::new(RefCell::new(0));

        let inner = store.clone();
        let counter = seen.clone();
        store.add_listener(move |projects| {
            assert_eq!(inner.len(), projects.len());
            *counter.borrow_mut() += 1;
        });

        store.add_project("one", "first project", 2);
        store.add_project("two", "second project", 2);
        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn separate_stores_are_not_equal() {
        let a = StoreHandle::new();
        let b = StoreHandle::new();

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn snapshots_are_copies() {
        let store = StoreHandle::new();
        let received = Rc::new(RefCell::new(Vec::new()));

        let sink = received.clone();
        store.add_listener(move |projects| sink.borrow_mut().push(projects));

        store.add_project("one", "first project", 2);
        store.add_project("two", "second project", 2);

        let received = received.borrow();
        assert_eq!(received[0].len(), 1);
        assert_eq!(received[1].len(), 2);
    }
}
