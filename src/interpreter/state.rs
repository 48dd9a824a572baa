use std::collections::{HashMap, HashSet};

/// Stores the interpreter state shared by every line of a session.
///
/// The state consists of two separate concerns:
/// - the symbol table, mapping identifiers to their current integer value;
/// - the declared set, which gates every read and write of an identifier.
///
/// Only an executed `integer <name> ;` declaration adds to the declared set.
/// Access checks consult the declared set alone, regardless of whether the
/// symbol table holds a value for the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    values:   HashMap<String, i64>,
    declared: HashSet<String>,
}

impl State {
    /// Creates an empty state with no declared identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` and resets its value to zero.
    ///
    /// Declaring an identifier that is already declared is a legal
    /// re-initialization.
    ///
    /// # Example
    /// ```
    /// use minint::interpreter::state::State;
    ///
    /// let mut state = State::new();
    /// state.declare("x");
    /// state.assign("x", 7);
    /// state.declare("x");
    ///
    /// assert_eq!(state.value("x"), 0);
    /// ```
    pub fn declare(&mut self, name: &str) {
        self.declared.insert(name.to_string());
        self.values.insert(name.to_string(), 0);
    }

    /// Returns `true` if `name` has been declared in this session.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Returns the current value of `name`, or zero if it has none.
    ///
    /// Callers are expected to have checked [`State::is_declared`] first.
    #[must_use]
    pub fn value(&self, name: &str) -> i64 {
        self.values.get(name).copied().unwrap_or_default()
    }

    /// Stores `value` under `name`.
    pub fn assign(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_string(), value);
    }

    /// Returns the number of declared identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declared.len()
    }

    /// Returns `true` if nothing has been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
