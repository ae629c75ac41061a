//! Description panel tabs
//!
//! The left panel shows exactly one of three views. Selection is explicit;
//! nothing in the workspace switches tabs on its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::WorkspaceError;

/// Views available in the description panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Statement,
    Editorial,
    Submissions,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 3] = [Tab::Statement, Tab::Editorial, Tab::Submissions];

    /// Stable identifier (matches the serde representation)
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Statement => "statement",
            Tab::Editorial => "editorial",
            Tab::Submissions => "submissions",
        }
    }

    /// Label shown on the tab button
    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Statement => "Problem Statement",
            Tab::Editorial => "Editorial",
            Tab::Submissions => "Submissions",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Tab {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WorkspaceError::unknown_tab(s))
    }
}

/// Active-tab state holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabSelector {
    active: Tab,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `tab`. Selecting the active tab changes nothing.
    ///
    /// Returns true if the active tab changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }

    pub fn current(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_statement() {
        let tabs = TabSelector::new();
        assert_eq!(tabs.current(), Tab::Statement);
    }

    #[test]
    fn test_select_then_current() {
        let mut tabs = TabSelector::new();
        for tab in Tab::ALL {
            tabs.select(tab);
            assert_eq!(tabs.current(), tab);
        }
    }

    #[test]
    fn test_exactly_one_active() {
        let mut tabs = TabSelector::new();
        for tab in Tab::ALL {
            tabs.select(tab);
            let active = Tab::ALL.iter().filter(|t| tabs.is_active(**t)).count();
            assert_eq!(active, 1);
            assert!(tabs.is_active(tab));
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut tabs = TabSelector::new();
        assert!(tabs.select(Tab::Editorial));
        let before = tabs;
        assert!(!tabs.select(Tab::Editorial));
        assert_eq!(tabs, before);
    }

    #[test]
    fn test_parse_tab_names() {
        assert_eq!("statement".parse::<Tab>().unwrap(), Tab::Statement);
        assert_eq!(" Submissions ".parse::<Tab>().unwrap(), Tab::Submissions);
        let err = "hints".parse::<Tab>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_TAB");
    }
}
