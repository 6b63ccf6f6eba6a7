//! Dashboard tabs

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Complaints,
    Suppliers,
    Performance,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Overview,
        Tab::Complaints,
        Tab::Suppliers,
        Tab::Performance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Complaints => "Complaints",
            Tab::Suppliers => "Suppliers",
            Tab::Performance => "Performance",
        }
    }

    /// Identifier used by commands and the config file
    pub fn key(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Complaints => "complaints",
            Tab::Suppliers => "suppliers",
            Tab::Performance => "performance",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Overview => '1',
            Tab::Complaints => '2',
            Tab::Suppliers => '3',
            Tab::Performance => '4',
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Complaints => 1,
            Tab::Suppliers => 2,
            Tab::Performance => 3,
        }
    }

    pub fn from_shortcut(ch: char) -> Option<Tab> {
        Tab::ALL.iter().copied().find(|tab| tab.shortcut() == ch)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" | "ov" | "home" => Ok(Tab::Overview),
            "complaints" | "cmp" => Ok(Tab::Complaints),
            "suppliers" | "sup" => Ok(Tab::Suppliers),
            "performance" | "perf" => Ok(Tab::Performance),
            other => Err(format!("unknown tab '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Tab::Performance.next(), Tab::Overview);
        assert_eq!(Tab::Overview.prev(), Tab::Performance);
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_parse_and_shortcuts() {
        assert_eq!("perf".parse::<Tab>(), Ok(Tab::Performance));
        assert_eq!(" Suppliers ".parse::<Tab>(), Ok(Tab::Suppliers));
        assert!("trends".parse::<Tab>().is_err());
        assert_eq!(Tab::from_shortcut('2'), Some(Tab::Complaints));
        assert_eq!(Tab::from_shortcut('9'), None);
        for tab in Tab::ALL {
            assert_eq!(Tab::ALL[tab.index()], tab);
            assert_eq!(tab.key().parse::<Tab>(), Ok(tab));
        }
    }
}
