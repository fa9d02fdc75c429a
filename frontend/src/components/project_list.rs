use log::*;
use shared::{filter_by_status, Project, ProjectStatus, StoreHandle};
use yew::{classes, html, Component, ComponentLink, Html, Properties, ShouldRender};
use yewtil::NeqAssign;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub store: StoreHandle,
    pub kind: ProjectStatus,
}

/// Shows the titles of all projects with status `kind`.
pub struct ProjectList {
    props: Props,
    link: ComponentLink<Self>,
    projects: Vec<Project>,
    // bumped on every store switch, older subscriptions are ignored
    epoch: usize,
}

pub enum Msg {
    Projects(usize, Vec<Project>),
}

/// Forwards every change of `store` to `emit`, keeping only projects of `kind`.
fn subscribe<F>(store: &StoreHandle, kind: ProjectStatus, emit: F)
where
    F: Fn(Vec<Project>) + 'static,
{
    store.add_listener(move |projects| emit(filter_by_status(&projects, kind)));
}

impl ProjectList {
    fn listen(&self) {
        let link = self.link.clone();
        let epoch = self.epoch;
        subscribe(&self.props.store, self.props.kind, move |projects| {
            link.send_message(Msg::Projects(epoch, projects))
        });
    }
}

impl Component for ProjectList {
    type Message = Msg;
    type Properties = Props;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        let list = ProjectList {
            props,
            link,
            projects: Vec::new(),
            epoch: 0,
        };
        list.listen();
        list
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Msg::Projects(epoch, _) if epoch != self.epoch => {
                debug!("{} list: dropping update from a previous store", self.props.kind);
                false
            }
            Msg::Projects(_, projects) => {
                debug!("{} list: {} projects", self.props.kind, projects.len());
                self.projects.neq_assign(projects)
            }
        }
    }

    fn change(&mut self, props: Self::Properties) -> ShouldRender {
        let store_changed = !self.props.store.ptr_eq(&props.store);
        if !self.props.neq_assign(props) {
            return false;
        }

        if store_changed {
            info!("{} list switched to another store", self.props.kind);
            self.epoch += 1;
            self.listen();
        }
        self.projects = filter_by_status(&self.props.store.projects(), self.props.kind);
        true
    }

    fn view(&self) -> Html {
        let kind = self.props.kind;
        let list_id = format!("{}-projects-list", kind);
        let heading = format!("{} PROJECTS", kind.as_str().to_uppercase());

        html! {
            <section class=classes!("projects", kind.as_str())>
                <header>
                    <h2>{heading}</h2>
                </header>
                <ul id=list_id>
                    { for self.projects.iter().map(|project| html! {
                        <li key=project.id().to_string()>{project.title()}</li>
                    })}
                </ul>
            </section>
        }
    }
}
