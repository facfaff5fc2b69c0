/// Static definition of one navigable section.
/// All fields are 'static so registries can be compile-time constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    /// Unique, stable identifier. Doubles as the panel element id.
    pub id: &'static str,
    /// Text shown on the tab button
    pub label: &'static str,
}

impl TabDescriptor {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }

    /// Element id of the button that controls this tab's panel.
    ///
    /// Example: `TabDescriptor::new("about", "About").button_id()` → `"about-tab"`
    pub fn button_id(&self) -> String {
        format!("{}-tab", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_id() {
        assert_eq!(TabDescriptor::new("contact", "Visit").button_id(), "contact-tab");
    }
}
