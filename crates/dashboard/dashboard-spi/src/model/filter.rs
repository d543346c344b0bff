//! Series selector of the cumulative and daily charts.

use serde::{Deserialize, Serialize};
use series_spi::{Country, SeriesGroup};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Which series a chart shows.
///
/// Each key maps to exactly one [`SeriesGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    Italy,
    France,
    Spain,
    Uk,
    Netherlands,
    Lombardy,
    Germany,
    Usa,
}

impl Filter {
    /// Every filter, in menu order.
    pub const ALL: [Filter; 8] = [
        Filter::Italy,
        Filter::Lombardy,
        Filter::France,
        Filter::Spain,
        Filter::Uk,
        Filter::Netherlands,
        Filter::Germany,
        Filter::Usa,
    ];

    /// URL-fragment key.
    pub fn key(&self) -> &'static str {
        match self {
            Filter::Italy => "italy",
            Filter::France => "france",
            Filter::Spain => "spain",
            Filter::Uk => "uk",
            Filter::Netherlands => "netherlands",
            Filter::Lombardy => "lombardy",
            Filter::Germany => "germany",
            Filter::Usa => "usa",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Filter::Italy => "Italy",
            Filter::France => "France",
            Filter::Spain => "Spain",
            Filter::Uk => "UK",
            Filter::Netherlands => "Netherlands",
            Filter::Lombardy => "Lombardy",
            Filter::Germany => "Germany",
            Filter::Usa => "USA",
        }
    }

    /// The series this filter selects.
    pub fn group(&self) -> SeriesGroup {
        match self {
            Filter::Italy => SeriesGroup::National,
            Filter::Lombardy => SeriesGroup::region("Lombardia"),
            Filter::France => SeriesGroup::Country(Country::France),
            Filter::Spain => SeriesGroup::Country(Country::Spain),
            Filter::Uk => SeriesGroup::Country(Country::UnitedKingdom),
            Filter::Netherlands => SeriesGroup::Country(Country::Netherlands),
            Filter::Germany => SeriesGroup::Country(Country::Germany),
            Filter::Usa => SeriesGroup::Country(Country::Us),
        }
    }

    /// 1-based day of the threshold-aligned series on which lockdown began.
    pub fn lockdown_day(&self) -> Option<usize> {
        match self {
            Filter::Italy => Some(13),
            Filter::France => Some(10),
            Filter::Spain => Some(8),
            Filter::Uk => Some(11),
            Filter::Lombardy => Some(10),
            Filter::Netherlands | Filter::Germany | Filter::Usa => None,
        }
    }
}

impl FromStr for Filter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| DashboardError::UnknownFilter(s.to_string()))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_parses_back() {
        for filter in Filter::ALL {
            assert_eq!(filter.key().parse::<Filter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!(
            "atlantis".parse::<Filter>().unwrap_err(),
            DashboardError::UnknownFilter("atlantis".to_string())
        );
        // Keys are case-sensitive
        assert!("Italy".parse::<Filter>().is_err());
    }

    #[test]
    fn test_groups_are_distinct() {
        let groups: std::collections::HashSet<SeriesGroup> =
            Filter::ALL.iter().map(|f| f.group()).collect();
        assert_eq!(groups.len(), Filter::ALL.len());
    }

    #[test]
    fn test_lockdown_days() {
        assert_eq!(Filter::Italy.lockdown_day(), Some(13));
        assert_eq!(Filter::Spain.lockdown_day(), Some(8));
        assert_eq!(Filter::Netherlands.lockdown_day(), None);
    }

    #[test]
    fn test_germany_and_usa_map_to_countries() {
        assert_eq!(Filter::Germany.group(), SeriesGroup::Country(Country::Germany));
        assert_eq!(Filter::Usa.group(), SeriesGroup::Country(Country::Us));
    }

    #[test]
    fn test_serde_uses_key() {
        assert_eq!(serde_json::to_string(&Filter::Uk).unwrap(), "\"uk\"");
        assert_eq!(Filter::Lombardy.to_string(), "lombardy");
    }
}
