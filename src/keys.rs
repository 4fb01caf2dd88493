pub const ESCAPE: &str = "Escape";

const EDITABLE_TAGS: [&str; 3] = ["input", "textarea", "select"];

/// The parts of a `keydown` event a binding looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    key: String,
    editable_target: bool,
}

impl KeyPress {
    /// Uses `key`, falling back to `code` for synthetic events that leave it
    /// empty.
    pub fn new(key: &str, code: &str) -> Self {
        let resolved = if key.is_empty() { code } else { key };

        Self {
            key: resolved.to_lowercase(),
            editable_target: false,
        }
    }

    pub fn in_editable(mut self, editable_target: bool) -> Self {
        self.editable_target = editable_target;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

pub fn is_editable_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || EDITABLE_TAGS
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// A single global shortcut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    key: String,
    skip_editable: bool,
}

impl KeyBinding {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_lowercase(),
            skip_editable: false,
        }
    }

    /// Ignore presses aimed at text fields so typing is never hijacked.
    pub fn outside_editable(mut self) -> Self {
        self.skip_editable = true;
        self
    }

    pub fn matches(&self, press: &KeyPress) -> bool {
        if self.skip_editable && press.editable_target {
            return false;
        }

        !self.key.is_empty() && press.key == self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn match_is_case_insensitive() {
        let binding = KeyBinding::new("k");
        assert!(binding.matches(&KeyPress::new("K", "KeyK")));
        assert!(binding.matches(&KeyPress::new("k", "KeyK")));
        assert!(!binding.matches(&KeyPress::new("j", "KeyJ")));
    }

    #[test]
    fn escape_binding_matches_escape_only() {
        let binding = KeyBinding::new(ESCAPE);
        assert!(binding.matches(&KeyPress::new("Escape", "Escape")));
        assert!(!binding.matches(&KeyPress::new("Enter", "Enter")));
    }

    #[test]
    fn empty_key_falls_back_to_code() {
        let press = KeyPress::new("", "Escape");
        assert_eq!(press.key(), "escape");
        assert!(KeyBinding::new(ESCAPE).matches(&press));
    }

    #[test]
    fn editable_targets_are_skipped_only_when_requested() {
        let press = KeyPress::new("k", "KeyK").in_editable(is_editable_target("TEXTAREA", false));

        assert!(!KeyBinding::new("k").outside_editable().matches(&press));
        assert!(KeyBinding::new("k").matches(&press));
    }

    #[test]
    fn editable_detection() {
        assert!(is_editable_target("INPUT", false));
        assert!(is_editable_target("select", false));
        assert!(is_editable_target("DIV", true));
        assert!(!is_editable_target("BUTTON", false));
    }

    #[test]
    fn empty_binding_never_fires() {
        assert!(!KeyBinding::new("").matches(&KeyPress::new("", "")));
    }

    proptest! {
        #[test]
        fn fires_iff_keys_match_ignoring_case(bound in "[a-zA-Z]{1,6}", pressed in "[a-zA-Z]{1,6}") {
            let binding = KeyBinding::new(&bound);
            let fired = binding.matches(&KeyPress::new(&pressed, ""));
            prop_assert_eq!(fired, bound.eq_ignore_ascii_case(&pressed));
        }
    }
}
