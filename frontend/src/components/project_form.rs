use log::*;
use shared::{FormRules, ProjectInput, StoreHandle};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::{html, Component, ComponentLink, FocusEvent, Html, NodeRef, Properties, ShouldRender};
use yewtil::NeqAssign;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub store: StoreHandle,
    pub rules: FormRules,
}

pub struct ProjectForm {
    props: Props,
    link: ComponentLink<Self>,
    title_ref: NodeRef,
    description_ref: NodeRef,
    people_ref: NodeRef,
}

pub enum Msg {
    Submit,
}

fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.alert_with_message(message) {
                warn!("failed to show alert: {:?}", err);
            }
        }
        None => warn!("no window to alert: {}", message),
    }
}

impl ProjectForm {
    fn inputs(&self) -> Option<(HtmlInputElement, HtmlTextAreaElement, HtmlInputElement)> {
        Some((
            self.title_ref.cast::<HtmlInputElement>()?,
            self.description_ref.cast::<HtmlTextAreaElement>()?,
            self.people_ref.cast::<HtmlInputElement>()?,
        ))
    }

    fn submit(&self) {
        let (title, description, people) = match self.inputs() {
            Some(inputs) => inputs,
            None => {
                warn!("project form is not mounted, ignoring submit");
                return;
            }
        };

        match ProjectInput::gather(
            &title.value(),
            &description.value(),
            &people.value(),
            &self.props.rules,
        ) {
            Ok(input) => {
                let project = input.submit(&self.props.store);
                info!("added project {} '{}'", project.id(), project.title());
                title.set_value("");
                description.set_value("");
                people.set_value("");
            }
            Err(err) => {
                info!("form rejected: {}", err);
                alert(&err.to_string());
            }
        }
    }
}

impl Component for ProjectForm {
    type Message = Msg;
    type Properties = Props;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        ProjectForm {
            props,
            link,
            title_ref: NodeRef::default(),
            description_ref: NodeRef::default(),
            people_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Msg::Submit => self.submit(),
        }
        false
    }

    fn change(&mut self, props: Self::Properties) -> ShouldRender {
        self.props.neq_assign(props)
    }

    fn view(&self) -> Html {
        let onsubmit = self.link.callback(|e: FocusEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="project-input" onsubmit=onsubmit>
                <div class="form-control">
                    <label for="title">{"Title"}</label>
                    <input type="text" id="title" ref=self.title_ref.clone() />
                </div>
                <div class="form-control">
                    <label for="description">{"Description"}</label>
                    <textarea id="description" rows="3" ref=self.description_ref.clone() />
                </div>
                <div class="form-control">
                    <label for="people">{"People"}</label>
                    <input type="number" id="people" step="1" min="0" max="10"
                        ref=self.people_ref.clone() />
                </div>
                <button type="submit">{"ADD PROJECT"}</button>
            </form>
        }
    }
}
