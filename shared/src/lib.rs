mod config;
mod input;
mod project;
mod store;
mod validation;

pub use config::*;
pub use input::*;
pub use project::*;
pub use store::*;
pub use validation::*;
