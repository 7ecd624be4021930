use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelName {
    #[default]
    Home,
    Yield,
    Disease,
    Recommendations,
}

impl PanelName {
    pub const ALL: [PanelName; 4] = [
        PanelName::Home,
        PanelName::Yield,
        PanelName::Disease,
        PanelName::Recommendations,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Yield => "yield",
            Self::Disease => "disease",
            Self::Recommendations => "recommendations",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Yield => "Yield Prediction",
            Self::Disease => "Disease Detection",
            Self::Recommendations => "Recommendations",
        }
    }
}

impl fmt::Display for PanelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPanel(pub String);

impl FromStr for PanelName {
    type Err = UnknownPanel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let slug = value.trim().trim_start_matches('#');
        PanelName::ALL
            .into_iter()
            .find(|panel| panel.slug().eq_ignore_ascii_case(slug))
            .ok_or_else(|| UnknownPanel(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub name: PanelName,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelChange {
    pub previous: Option<PanelName>,
    pub current: PanelName,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    panels: Vec<Panel>,
}

impl NavigationController {
    pub fn new(names: &[PanelName]) -> Self {
        let mut panels: Vec<Panel> = Vec::with_capacity(names.len());
        for &name in names {
            if panels.iter().all(|panel| panel.name != name) {
                panels.push(Panel {
                    name,
                    active: false,
                });
            }
        }
        Self { panels }
    }

    pub fn select(&mut self, name: &str) -> Option<PanelChange> {
        match name.parse::<PanelName>() {
            Ok(panel) => self.select_panel(panel),
            Err(UnknownPanel(name)) => {
                log::debug!("Ignoring selection of unknown panel {name:?}");
                None
            }
        }
    }

    pub fn select_panel(&mut self, name: PanelName) -> Option<PanelChange> {
        if !self.panels.iter().any(|panel| panel.name == name) {
            log::debug!("Ignoring selection of unregistered panel {name}");
            return None;
        }

        let previous = self.active();
        for panel in &mut self.panels {
            panel.active = panel.name == name;
        }

        log::debug!("Switched panel {previous:?} -> {name}");
        Some(PanelChange {
            previous,
            current: name,
        })
    }

    pub fn active(&self) -> Option<PanelName> {
        self.panels
            .iter()
            .find(|panel| panel.active)
            .map(|panel| panel.name)
    }

    pub fn is_active(&self, name: PanelName) -> bool {
        self.active() == Some(name)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(&PanelName::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(nav: &NavigationController) -> usize {
        nav.panels().iter().filter(|panel| panel.active).count()
    }

    #[test]
    fn starts_with_no_active_panel() {
        let nav = NavigationController::default();
        assert_eq!(nav.active(), None);
        assert_eq!(active_count(&nav), 0);
    }

    #[test]
    fn every_selection_leaves_exactly_one_panel_active() {
        let mut nav = NavigationController::default();
        for name in PanelName::ALL {
            let change = nav.select(name.slug()).expect("known panel");
            assert_eq!(change.current, name);
            assert_eq!(active_count(&nav), 1);
            for panel in nav.panels() {
                assert_eq!(panel.active, panel.name == name);
            }
        }
    }

    #[test]
    fn unknown_name_is_a_no_op() {
        let mut nav = NavigationController::default();
        nav.select("yield");

        assert_eq!(nav.select("weather"), None);
        assert_eq!(nav.active(), Some(PanelName::Yield));
        assert_eq!(active_count(&nav), 1);
    }

    #[test]
    fn unregistered_panel_is_a_no_op() {
        let mut nav = NavigationController::new(&[PanelName::Yield, PanelName::Disease]);
        nav.select_panel(PanelName::Disease);

        assert_eq!(nav.select_panel(PanelName::Home), None);
        assert!(nav.is_active(PanelName::Disease));
    }

    #[test]
    fn change_reports_previous_panel() {
        let mut nav = NavigationController::default();
        let first = nav.select("#disease").expect("href style slug");
        assert_eq!(first.previous, None);

        let second = nav.select("Recommendations").expect("case-insensitive slug");
        assert_eq!(
            second,
            PanelChange {
                previous: Some(PanelName::Disease),
                current: PanelName::Recommendations,
            }
        );
    }

    #[test]
    fn duplicate_registrations_are_collapsed() {
        let nav = NavigationController::new(&[PanelName::Home, PanelName::Home]);
        assert_eq!(nav.panels().len(), 1);
    }
}
