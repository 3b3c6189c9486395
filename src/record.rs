use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FormatResult};

/// An immutable named record with an age.
///
/// Fields are private; a `Record` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    name: String,
    age: u32,
}

impl Record {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "{}/{}", self.name, self.age)
    }
}
