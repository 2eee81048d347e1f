use rocket::serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ProfileTab {
    Statistics,
    Matches,
    Achievements,
    Tournaments,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::Statistics,
        ProfileTab::Matches,
        ProfileTab::Achievements,
        ProfileTab::Tournaments,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Statistics => "statistics",
            Self::Matches => "matches",
            Self::Achievements => "achievements",
            Self::Tournaments => "tournaments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Statistics => "General",
            Self::Matches => "Matches",
            Self::Achievements => "Achievements",
            Self::Tournaments => "Tournaments",
        }
    }
}

impl Default for ProfileTab {
    fn default() -> Self {
        Self::Statistics
    }
}

impl std::str::FromStr for ProfileTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("unknown tab: {}", s))
    }
}

impl std::fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TabButton {
    pub tab: ProfileTab,
    pub name: &'static str,
    pub active: bool,
    pub rounded_left: bool,
    pub rounded_right: bool,
}

/// Which profile tab is showing. Only user clicks move it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct TabState {
    active: ProfileTab,
}

impl TabState {
    pub fn new(active: ProfileTab) -> Self {
        Self { active }
    }

    pub fn active(&self) -> ProfileTab {
        self.active
    }

    pub fn select(&mut self, tab: ProfileTab) {
        self.active = tab;
    }

    pub fn buttons(&self) -> Vec<TabButton> {
        let last = ProfileTab::ALL.len() - 1;
        ProfileTab::ALL
            .iter()
            .enumerate()
            .map(|(index, &tab)| TabButton {
                tab,
                name: tab.label(),
                active: tab == self.active,
                rounded_left: index == 0,
                rounded_right: index == last,
            })
            .collect()
    }
}
