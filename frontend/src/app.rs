use log::*;
use yew::{html, Component, ComponentLink, Html, Properties, ShouldRender};
use yewtil::NeqAssign;

use shared::*;

use crate::components::{project_form::ProjectForm, project_list::ProjectList};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub rules: FormRules,
}

pub struct App {
    props: Props,
    store: StoreHandle,
}

impl Component for App {
    type Message = ();
    type Properties = Props;

    fn create(props: Self::Properties, _link: ComponentLink<Self>) -> Self {
        let store = StoreHandle::instance();
        info!("starting with {} projects", store.len());
        App { props, store }
    }

    fn update(&mut self, _msg: Self::Message) -> ShouldRender {
        false
    }

    fn change(&mut self, props: Self::Properties) -> ShouldRender {
        self.props.neq_assign(props)
    }

    fn view(&self) -> Html {
        html! {
            <>
                <ProjectForm
                    store=self.store.clone()
                    rules=self.props.rules.clone() />
                <ProjectList
                    store=self.store.clone()
                    kind=ProjectStatus::Active />
                <ProjectList
                    store=self.store.clone()
                    kind=ProjectStatus::Finished />
            </>
        }
    }
}
