use log::debug;
use thiserror::Error;

use crate::config::FormRules;
use crate::project::Project;
use crate::store::StoreHandle;
use crate::validation::validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input, please try again!")]
    Invalid,
}

/// Validated contents of the project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Parses with Rust's `f64` grammar (so `inf` is accepted, `0x10` is not).
/// Blank text counts as zero, anything unparsable as NaN.
fn coerce_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse().unwrap_or(f64::NAN)
}

impl ProjectInput {
    /// Turns the raw form values into an input ready for the store.
    pub fn gather(
        title: &str,
        description: &str,
        people: &str,
        rules: &FormRules,
    ) -> Result<Self, InputError> {
        let headcount = coerce_number(people);

        let valid = validate(&rules.title.apply(title))
            && validate(&rules.description.apply(description))
            && validate(&rules.people.apply(headcount));
        if !valid {
            debug!("rejected form input (people: {:?})", people);
            return Err(InputError::Invalid);
        }

        if headcount.fract() != 0.0 || headcount < 0.0 || headcount > f64::from(u32::MAX) {
            debug!("rejected non-integral headcount {}", headcount);
            return Err(InputError::Invalid);
        }

        Ok(ProjectInput {
            title: title.to_string(),
            description: description.to_string(),
            people: headcount as u32,
        })
    }

    pub fn submit(self, store: &StoreHandle) -> Project {
        store.add_project(self.title, self.description, self.people)
    }
}
