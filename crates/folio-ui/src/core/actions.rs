//! User actions routed through the controller's dispatcher.

/// Attribute naming the action on a clickable element.
pub const ACTION_ATTRIBUTE: &str = "data-action";
/// Attribute carrying the action argument.
pub const VALUE_ATTRIBUTE: &str = "data-value";

/// Action name for language switch buttons.
pub const SET_LANGUAGE: &str = "set-language";
/// Action name for publication detail toggles.
pub const TOGGLE_PUBLICATION: &str = "toggle-publication";

/// Action triggered from rendered markup or an exported hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Switch to the given language tag.
    SetLanguage(String),
    /// Expand or collapse a publication's detail panel.
    TogglePublication(String),
}

impl PageAction {
    /// Decode an action from `data-action` / `data-value` attribute values.
    #[must_use]
    pub fn from_data(action: &str, value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match action {
            SET_LANGUAGE => Some(Self::SetLanguage(value.to_string())),
            TOGGLE_PUBLICATION => Some(Self::TogglePublication(value.to_string())),
            _ => None,
        }
    }

    /// Attribute pair that makes an element dispatch this action when clicked.
    #[must_use]
    pub fn data_attributes(&self) -> (&'static str, &str) {
        match self {
            Self::SetLanguage(tag) => (SET_LANGUAGE, tag.as_str()),
            Self::TogglePublication(id) => (TOGGLE_PUBLICATION, id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_attributes_decode_to_actions() {
        assert_eq!(
            PageAction::from_data("set-language", "zh"),
            Some(PageAction::SetLanguage("zh".to_string()))
        );
        assert_eq!(
            PageAction::from_data("toggle-publication", " sketch "),
            Some(PageAction::TogglePublication("sketch".to_string()))
        );
        assert_eq!(PageAction::from_data("set-language", ""), None);
        assert_eq!(PageAction::from_data("delete", "x"), None);
    }

    #[test]
    fn attributes_match_decoder() {
        let action = PageAction::TogglePublication("p1".to_string());
        let (name, value) = action.data_attributes();
        assert_eq!(PageAction::from_data(name, value), Some(action.clone()));
    }
}
