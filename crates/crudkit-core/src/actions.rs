/// Actions that render a link per record in the list view.
const RECORD_ACTIONS: &[&str] = &["show", "edit"];

const READ_ACTIONS: &[&str] = &["list", "filter", "show"];
const WRITE_ACTIONS: &[&str] = &["list", "filter", "show", "new", "edit", "delete"];

/// The set of generated operations. One of two fixed variants, selected by
/// the write flag at invocation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSet {
    actions: &'static [&'static str],
}

impl ActionSet {
    /// `{list, filter, show}`.
    pub fn read_only() -> Self {
        Self {
            actions: READ_ACTIONS,
        }
    }

    /// `{list, filter, show, new, edit, delete}`.
    pub fn read_write() -> Self {
        Self {
            actions: WRITE_ACTIONS,
        }
    }

    /// Select a variant from the `with_write` flag.
    pub fn for_write(with_write: bool) -> Self {
        if with_write {
            Self::read_write()
        } else {
            Self::read_only()
        }
    }

    pub fn contains(&self, action: &str) -> bool {
        self.actions.contains(&action)
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.actions
    }

    /// Order-preserving restriction to `{show, edit}`, used by the list view
    /// to decide which per-row action links to render.
    pub fn record_actions(&self) -> Vec<&'static str> {
        self.actions
            .iter()
            .copied()
            .filter(|a| RECORD_ACTIONS.contains(a))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_variant() {
        let actions = ActionSet::for_write(false);
        assert_eq!(actions.names(), &["list", "filter", "show"]);
        assert!(!actions.contains("new"));
        assert!(!actions.contains("edit"));
        assert!(!actions.contains("delete"));
    }

    #[test]
    fn read_write_variant() {
        let actions = ActionSet::for_write(true);
        assert_eq!(
            actions.names(),
            &["list", "filter", "show", "new", "edit", "delete"]
        );
    }

    #[test]
    fn record_actions_for_read_write() {
        let actions = ActionSet::read_write();
        assert_eq!(actions.record_actions(), vec!["show", "edit"]);
    }

    #[test]
    fn record_actions_for_read_only() {
        let actions = ActionSet::read_only();
        assert_eq!(actions.record_actions(), vec!["show"]);
    }
}
