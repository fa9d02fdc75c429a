pub mod project_form;
pub mod project_list;
