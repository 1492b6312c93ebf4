use std::collections::HashMap;

use crate::error::RuntimeError;

/// Stores the state of one interpreter session.
///
/// This struct holds the symbol table: a single flat mapping from variable
/// names to integer values. There is no scoping and no shadowing;
/// re-assignment overwrites in place. The table persists across lines within
/// one session and is reset only by creating a new `Context`.
///
/// ## Usage
///
/// `Context` is created once and passed by mutable reference through the
/// parsing pipeline, which reads and writes variables as it encounters them.
pub struct Context {
    /// A mapping from variable names to their current values.
    variables: HashMap<String, i64>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new session with no variables defined.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(), }
    }

    /// Looks up the current value of a variable.
    ///
    /// # Errors
    /// Returns `UnknownVariable` when the name was never assigned.
    pub fn lookup(&self, name: &str) -> Result<i64, RuntimeError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(), })
    }

    /// Assigns a value to a variable, inserting it or overwriting the
    /// previous value.
    pub fn assign(&mut self, name: &str, value: i64) {
        self.variables.insert(name.to_string(), value);
    }
}
