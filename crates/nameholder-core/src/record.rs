use tracing::trace;

/// Value every freshly constructed record starts with
pub const DEFAULT_NAME: &str = "king";

/// A record holding one private, mutable name.
///
/// The name can only be read through [`NameHolder::get_name`] and replaced
/// through [`NameHolder::set_name`]. Every instance owns its own value, so
/// mutating one record never affects another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameHolder {
    name: String,
}

impl NameHolder {
    /// Create a record holding [`DEFAULT_NAME`]
    pub fn new() -> Self {
        trace!("constructing name holder");
        Self {
            name: DEFAULT_NAME.to_string(),
        }
    }

    /// Current name
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Replace the current name. Any text is accepted, including the empty string.
    pub fn set_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        trace!(name = %value, "setting name");
        self.name = value;
    }
}

impl Default for NameHolder {
    fn default() -> Self {
        Self::new()
    }
}
