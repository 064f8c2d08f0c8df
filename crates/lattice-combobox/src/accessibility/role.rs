//! Accessibility roles for combobox elements.

/// The accessibility role of one combobox element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AccessibleRole {
    /// The visible label naming the combobox.
    Label,

    /// The text input that owns the popup.
    ComboBox,

    /// The popup list of items.
    ListBox,

    /// One item within the list.
    Option,

    /// A selected-item chip in multi-select mode.
    SelectedItem,

    /// Helper or instruction text describing the input.
    HelperText,
}

impl AccessibleRole {
    /// The ARIA `role` attribute value, for roles that carry one.
    ///
    /// Labels and helper text are plain elements referenced by id.
    pub fn aria_role(self) -> Option<&'static str> {
        match self {
            AccessibleRole::Label | AccessibleRole::HelperText => None,
            AccessibleRole::ComboBox => Some("combobox"),
            AccessibleRole::ListBox => Some("listbox"),
            AccessibleRole::Option => Some("option"),
            AccessibleRole::SelectedItem => Some("button"),
        }
    }

    /// Convert to AccessKit's Role enum.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_role(self) -> accesskit::Role {
        use accesskit::Role;

        match self {
            AccessibleRole::Label => Role::Label,
            AccessibleRole::ComboBox => Role::ComboBox,
            AccessibleRole::ListBox => Role::ListBox,
            AccessibleRole::Option => Role::ListBoxOption,
            AccessibleRole::SelectedItem => Role::Button,
            AccessibleRole::HelperText => Role::Label, // No helper-text role, use Label
        }
    }
}

#[cfg(feature = "accessibility")]
impl From<AccessibleRole> for accesskit::Role {
    fn from(role: AccessibleRole) -> Self {
        role.to_accesskit_role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_roles() {
        assert_eq!(AccessibleRole::ComboBox.aria_role(), Some("combobox"));
        assert_eq!(AccessibleRole::Option.aria_role(), Some("option"));
        assert_eq!(AccessibleRole::Label.aria_role(), None);
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_accesskit_mapping() {
        assert_eq!(accesskit::Role::from(AccessibleRole::ComboBox), accesskit::Role::ComboBox);
        assert_eq!(
            AccessibleRole::Option.to_accesskit_role(),
            accesskit::Role::ListBoxOption
        );
    }
}
