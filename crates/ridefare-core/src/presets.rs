//! Preset location table for quick-route shortcuts.
//!
//! A fixed, exact-match mapping from well-known route endpoints to
//! pre-resolved coordinates. Seeding a draft from here bypasses the
//! geocoder entirely; the distance engine still runs against the stored
//! coordinates. Keys are case-sensitive.

use crate::models::LocationData;
use std::collections::HashMap;

/// Static table of pre-resolved shortcut endpoints.
#[derive(Debug, Clone)]
pub struct PresetLocations {
    entries: HashMap<String, LocationData>,
}

impl PresetLocations {
    /// The operator's standard shortcut endpoints.
    pub fn standard() -> Self {
        let mut entries = HashMap::new();
        let mut add = |key: &str, name: &str, lat: &str, lon: &str| {
            entries.insert(key.to_string(), LocationData::new(name, lat, lon));
        };

        add("Mumbai", "Mumbai (Gateway of India)", "18.9220", "72.8347");
        add("Pune", "Pune (Railway Station)", "18.5284", "73.8739");
        add("Shirdi", "Shirdi (Sai Baba Temple)", "19.7645", "74.4762");
        add("Airport", "Mumbai Airport (T2)", "19.0896", "72.8656");
        add("Badlapur", "Badlapur Station", "19.1495", "73.2343");
        add("Navi Mumbai", "Vashi, Navi Mumbai", "19.0330", "73.0297");
        add("Mumbai Sightseeing", "Marine Drive, Mumbai", "18.9431", "72.8230");

        Self { entries }
    }

    /// Exact-match lookup by shortcut key.
    pub fn lookup(&self, key: &str) -> Option<&LocationData> {
        self.entries.get(key)
    }

    /// All shortcut keys, sorted for stable listing.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for PresetLocations {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_keys() {
        let presets = PresetLocations::standard();
        let shirdi = presets.lookup("Shirdi").unwrap();
        assert_eq!(shirdi.name, "Shirdi (Sai Baba Temple)");
        assert_eq!(shirdi.lat, "19.7645");
        assert_eq!(shirdi.lon, "74.4762");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let presets = PresetLocations::standard();
        assert!(presets.lookup("shirdi").is_none());
        assert!(presets.lookup("SHIRDI").is_none());
    }

    #[test]
    fn test_unknown_key() {
        let presets = PresetLocations::standard();
        assert!(presets.lookup("Nashik").is_none());
    }

    #[test]
    fn test_all_presets_have_parseable_coords() {
        let presets = PresetLocations::standard();
        assert_eq!(presets.keys().len(), 7);
        for key in presets.keys() {
            presets.lookup(key).unwrap().coords().unwrap();
        }
    }
}
