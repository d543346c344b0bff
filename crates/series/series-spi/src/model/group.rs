//! Source identity of a series.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Countries published by the global feeds.
///
/// Serialized with the name used by the CSV time-series feed; the French
/// names of the aggregator feed are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "China", alias = "Chine")]
    China,
    #[serde(rename = "US", alias = "États-Unis")]
    Us,
    #[serde(rename = "France")]
    France,
    #[serde(rename = "Spain", alias = "Espagne")]
    Spain,
    #[serde(rename = "United Kingdom", alias = "Royaume-Uni")]
    UnitedKingdom,
    #[serde(rename = "Netherlands", alias = "Pays-Bas")]
    Netherlands,
    #[serde(rename = "Germany", alias = "Allemagne")]
    Germany,
    #[serde(rename = "Korea, South", alias = "Corée du Sud")]
    SouthKorea,
    #[serde(rename = "Iran")]
    Iran,
}

impl Country {
    /// Every known country, in a stable order.
    pub const ALL: [Country; 9] = [
        Country::China,
        Country::Us,
        Country::France,
        Country::Spain,
        Country::UnitedKingdom,
        Country::Netherlands,
        Country::Germany,
        Country::SouthKorea,
        Country::Iran,
    ];

    /// Name used in the `Country/Region` column of the CSV feed.
    pub fn csse_name(&self) -> &'static str {
        match self {
            Country::China => "China",
            Country::Us => "US",
            Country::France => "France",
            Country::Spain => "Spain",
            Country::UnitedKingdom => "United Kingdom",
            Country::Netherlands => "Netherlands",
            Country::Germany => "Germany",
            Country::SouthKorea => "Korea, South",
            Country::Iran => "Iran",
        }
    }

    /// Name used in the `Pays` field of the aggregator feed.
    pub fn aggregator_name(&self) -> &'static str {
        match self {
            Country::China => "Chine",
            Country::Us => "États-Unis",
            Country::France => "France",
            Country::Spain => "Espagne",
            Country::UnitedKingdom => "Royaume-Uni",
            Country::Netherlands => "Pays-Bas",
            Country::Germany => "Allemagne",
            Country::SouthKorea => "Corée du Sud",
            Country::Iran => "Iran",
        }
    }

    /// Look a country up by its CSV feed name.
    pub fn from_csse_name(name: &str) -> Option<Country> {
        Country::ALL.into_iter().find(|c| c.csse_name() == name)
    }

    /// Look a country up by its aggregator feed name.
    pub fn from_aggregator_name(name: &str) -> Option<Country> {
        Country::ALL.into_iter().find(|c| c.aggregator_name() == name)
    }

    /// Whether the CSV feed splits this country into overseas territories
    /// next to a mainland row, rather than into provinces of one whole.
    pub fn has_mainland_row(&self) -> bool {
        matches!(
            self,
            Country::France | Country::UnitedKingdom | Country::Netherlands
        )
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.csse_name())
    }
}

/// Which slice of the upstream data a series belongs to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesGroup {
    /// National aggregate of the national feed
    National,
    /// One region of the regional feed
    Region(String),
    /// One country of the global feed
    Country(Country),
}

impl SeriesGroup {
    /// Shorthand for a region tag.
    pub fn region(name: &str) -> Self {
        SeriesGroup::Region(name.to_string())
    }
}

impl fmt::Display for SeriesGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesGroup::National => write!(f, "national"),
            SeriesGroup::Region(name) => write!(f, "region:{}", name),
            SeriesGroup::Country(country) => write!(f, "country:{}", country),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csse_name_lookup() {
        assert_eq!(Country::from_csse_name("Korea, South"), Some(Country::SouthKorea));
        assert_eq!(Country::from_csse_name("US"), Some(Country::Us));
        assert_eq!(Country::from_csse_name("Italy"), None);
    }

    #[test]
    fn test_aggregator_name_lookup() {
        assert_eq!(Country::from_aggregator_name("Espagne"), Some(Country::Spain));
        assert_eq!(Country::from_aggregator_name("États-Unis"), Some(Country::Us));
        assert_eq!(Country::from_aggregator_name("Italie"), None);
    }

    #[test]
    fn test_every_country_roundtrips_names() {
        for country in Country::ALL {
            assert_eq!(Country::from_csse_name(country.csse_name()), Some(country));
            assert_eq!(Country::from_aggregator_name(country.aggregator_name()), Some(country));
        }
    }

    #[test]
    fn test_country_serializes_as_csse_name() {
        let json = serde_json::to_string(&Country::UnitedKingdom).unwrap();
        assert_eq!(json, "\"United Kingdom\"");
    }

    #[test]
    fn test_country_accepts_aggregator_alias() {
        let country: Country = serde_json::from_str("\"Royaume-Uni\"").unwrap();
        assert_eq!(country, Country::UnitedKingdom);
    }

    #[test]
    fn test_mainland_countries() {
        assert!(Country::France.has_mainland_row());
        assert!(!Country::Us.has_mainland_row());
    }

    #[test]
    fn test_group_display() {
        assert_eq!(SeriesGroup::National.to_string(), "national");
        assert_eq!(SeriesGroup::region("Lombardia").to_string(), "region:Lombardia");
        assert_eq!(SeriesGroup::Country(Country::Spain).to_string(), "country:Spain");
    }

    #[test]
    fn test_group_serialization() {
        let json = serde_json::to_string(&SeriesGroup::region("Veneto")).unwrap();
        assert_eq!(json, r#"{"region":"Veneto"}"#);
        let national: SeriesGroup = serde_json::from_str("\"national\"").unwrap();
        assert_eq!(national, SeriesGroup::National);
    }
}
