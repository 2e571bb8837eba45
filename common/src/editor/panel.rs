/// Expansion state of a collapsible section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    expanded: bool,
}

impl Panel {
    pub fn new(initially_expanded: bool) -> Self {
        Self {
            expanded: initially_expanded,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Pure flip; contained data is unaffected.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Builds the content only while expanded, so a collapsed panel pays
    /// nothing for it.
    pub fn content<T>(&self, build: impl FnOnce() -> T) -> Option<T> {
        self.expanded.then(build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_state() {
        for initial in [true, false] {
            let mut panel = Panel::new(initial);
            panel.toggle();
            assert_ne!(panel.is_expanded(), initial);
            panel.toggle();
            assert_eq!(panel.is_expanded(), initial);
        }
    }

    #[test]
    fn collapsed_panel_never_builds_content() {
        let panel = Panel::new(false);
        let mut built = false;
        assert_eq!(panel.content(|| built = true), None);
        assert!(!built);

        let open = Panel::new(true);
        assert_eq!(open.content(|| "body"), Some("body"));
    }
}
