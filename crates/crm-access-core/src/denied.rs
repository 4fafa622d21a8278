//! Copy for the "access denied" notice.
//!
//! Shown when a route-level check fails explicitly, e.g. an opportunity
//! detail view that calls `can_view(Opportunities)` itself instead of wrapping
//! its whole tree in a gate. Presentational only.

use crate::model::{ObjectType, PermissionAction};
use std::fmt;

const TITLE: &str = "Access Denied";
const CONTACT_SUPPORT: &str =
    "If you believe you should have access, contact your Salesforce administrator.";

/// Access-denied notice with object/action-specific copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionDenied {
    object: Option<ObjectType>,
    action: Option<PermissionAction>,
    message: Option<String>,
    show_contact_support: bool,
}

impl PermissionDenied {
    /// Generic notice for a page the user cannot open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notice for a specific `(object, action)` pair.
    #[must_use]
    pub fn for_action(object: ObjectType, action: PermissionAction) -> Self {
        Self {
            object: Some(object),
            action: Some(action),
            ..Self::default()
        }
    }

    /// Notice for an object the user cannot open at all.
    #[must_use]
    pub fn for_object(object: ObjectType) -> Self {
        Self {
            object: Some(object),
            ..Self::default()
        }
    }

    /// Replace the generated message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Append the contact-support line.
    #[must_use]
    pub fn with_contact_support(mut self) -> Self {
        self.show_contact_support = true;
        self
    }

    /// Heading text.
    #[must_use]
    pub fn title(&self) -> &'static str {
        TITLE
    }

    /// Body text.
    #[must_use]
    pub fn message(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match (self.object, self.action) {
            (Some(object), Some(action)) => format!(
                "You don't have permission to {} {}.",
                action.verb(),
                object.as_str()
            ),
            (Some(object), None) => {
                format!("You don't have permission to access {}.", object.as_str())
            }
            _ => "You don't have permission to access this page.".to_string(),
        }
    }

    /// Contact-support line, when enabled.
    #[must_use]
    pub fn contact_support(&self) -> Option<&'static str> {
        self.show_contact_support.then_some(CONTACT_SUPPORT)
    }
}

impl fmt::Display for PermissionDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title(), self.message())?;
        if let Some(line) = self.contact_support() {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_specific_copy() {
        let notice = PermissionDenied::for_action(ObjectType::Opportunities, PermissionAction::Read);
        assert_eq!(
            notice.message(),
            "You don't have permission to view opportunities."
        );
        assert_eq!(notice.contact_support(), None);
    }

    #[test]
    fn object_only_copy() {
        let notice = PermissionDenied::for_object(ObjectType::Contacts);
        assert_eq!(
            notice.message(),
            "You don't have permission to access contacts."
        );
    }

    #[test]
    fn custom_message_wins() {
        let notice = PermissionDenied::for_action(ObjectType::Accounts, PermissionAction::Delete)
            .with_message("Accounts are archived.");
        assert_eq!(notice.message(), "Accounts are archived.");
    }

    #[test]
    fn display_includes_contact_line() {
        let rendered = PermissionDenied::new().with_contact_support().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Access Denied");
        assert_eq!(lines[1], "You don't have permission to access this page.");
        assert!(lines[2].contains("administrator"));
    }
}
