//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    models::{CalendarDay, Day, Event, Item},
    time::format_date,
};

/// A displayable record with an identity and a human label.
pub trait Resource: fmt::Display {
    /// Resource kind used in messages, e.g. "item"
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn label(&self) -> String;
}

impl Resource for Item {
    const KIND: &'static str = "item";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}

impl Resource for Event {
    const KIND: &'static str = "event";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}

impl Resource for Day {
    const KIND: &'static str = "day";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

impl Resource for CalendarDay {
    const KIND: &'static str = "day";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format_date(self.date)
    }
}

/// The result of a create operation: a confirmation line and the record.
///
/// ```rust
/// use itinerary_core::{display::CreateResult, models::Item};
///
/// let item = Item {
///     id: "item_1".to_string(),
///     time: "09:00".to_string(),
///     title: "Breakfast".to_string(),
///     location: String::new(),
///     note: String::new(),
/// };
/// let output = CreateResult::new(item).to_string();
/// assert!(output.contains("Created item with ID: item_1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// The result of an update operation, optionally listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// The result of a delete operation.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.label(),
            self.resource.id()
        )
    }
}
