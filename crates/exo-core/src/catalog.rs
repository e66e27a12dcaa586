//! Sorting, filtering, sampling, and summary statistics over fetched planet
//! records.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::planet_type::PlanetType;
use crate::record::PlanetRecord;

/// Score at or above which a planet is listed as potentially habitable.
pub const HABITABLE_THRESHOLD: u8 = 50;

/// Radius (Earth radii, inclusive) at or below which a planet counts as Earth-sized.
pub const EARTH_SIZE_MAX_RADIUS: f64 = 1.5;

/// Sort order for a planet listing. Records missing the sort field go last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Newest discovery first.
    Discovery,
    /// Nearest first.
    Distance,
    /// Largest first.
    Radius,
    /// Heaviest first.
    Mass,
    /// Shortest orbit first.
    Period,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Distance => "distance",
            Self::Radius => "radius",
            Self::Mass => "mass",
            Self::Period => "period",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable in-place sort. Missing values sort after present ones.
pub fn sort_planets(records: &mut [PlanetRecord], key: SortKey) {
    match key {
        SortKey::Discovery => records.sort_by(|a, b| {
            descending_present_first(a.discovery_year, b.discovery_year, i32::cmp)
        }),
        SortKey::Distance => {
            records.sort_by(|a, b| ascending_present_first(a.distance, b.distance));
        }
        SortKey::Radius => records.sort_by(|a, b| {
            descending_present_first(a.radius, b.radius, f64::total_cmp)
        }),
        SortKey::Mass => {
            records.sort_by(|a, b| descending_present_first(a.mass, b.mass, f64::total_cmp));
        }
        SortKey::Period => records.sort_by(|a, b| {
            ascending_present_first(a.orbital_period, b.orbital_period)
        }),
    }
}

fn ascending_present_first(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn descending_present_first<T: Copy>(
    a: Option<T>,
    b: Option<T>,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&b, &a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Conjunctive filter over planet records. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetFilter {
    /// Case-insensitive substring of the planet name.
    pub name_contains: Option<String>,
    pub discovery_year: Option<i32>,
    /// Allowed planet types. Empty allows every type.
    pub types: Vec<PlanetType>,
}

impl PlanetFilter {
    #[must_use]
    pub fn matches(&self, record: &PlanetRecord) -> bool {
        if let Some(needle) = self.name_contains.as_deref() {
            let needle = needle.trim().to_lowercase();
            if !needle.is_empty() && !record.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if self
            .discovery_year
            .is_some_and(|year| record.discovery_year != Some(year))
        {
            return false;
        }
        self.types.is_empty() || self.types.contains(&record.planet_type)
    }

    #[must_use]
    pub fn apply(&self, records: &[PlanetRecord]) -> Vec<PlanetRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Records scoring at least `min_score`, best first.
#[must_use]
pub fn habitable_candidates(records: &[PlanetRecord], min_score: u8) -> Vec<PlanetRecord> {
    let mut candidates: Vec<PlanetRecord> = records
        .iter()
        .filter(|record| record.habitability_score >= min_score)
        .cloned()
        .collect();
    candidates.sort_by(|a, b| b.habitability_score.cmp(&a.habitability_score));
    candidates
}

/// Up to `n` records in random order, drawn without replacement.
///
/// Shuffles a copy of the whole listing and keeps the first `n`, so every
/// record is equally likely to appear.
#[must_use]
pub fn random_sample<R: Rng + ?Sized>(
    records: &[PlanetRecord],
    n: usize,
    rng: &mut R,
) -> Vec<PlanetRecord> {
    let mut sample = records.to_vec();
    sample.shuffle(rng);
    sample.truncate(n);
    sample
}

/// Headline counts for a planet listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub potentially_habitable: usize,
    pub earth_sized: usize,
    /// Count per planet type, keyed by display name.
    pub by_type: BTreeMap<String, usize>,
}

impl CatalogStats {
    #[must_use]
    pub fn from_records(records: &[PlanetRecord]) -> Self {
        let mut by_type = BTreeMap::new();
        for record in records {
            *by_type
                .entry(record.planet_type.as_str().to_string())
                .or_insert(0) += 1;
        }

        Self {
            total: records.len(),
            potentially_habitable: records
                .iter()
                .filter(|r| r.habitability_score >= HABITABLE_THRESHOLD)
                .count(),
            earth_sized: records
                .iter()
                .filter(|r| r.radius.is_some_and(|radius| radius <= EARTH_SIZE_MAX_RADIUS))
                .count(),
            by_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RawRecord, normalize};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn planet(
        name: &str,
        year: Option<i32>,
        radius: Option<f64>,
        distance: Option<f64>,
    ) -> PlanetRecord {
        normalize(&RawRecord {
            name: Some(name.to_string()),
            discovery_year: year,
            radius,
            distance,
            ..RawRecord::default()
        })
    }

    fn names(records: &[PlanetRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<PlanetRecord> {
        vec![
            planet("A", Some(2015), Some(1.0), Some(40.0)),
            planet("B", None, Some(11.0), None),
            planet("C", Some(2021), None, Some(4.2)),
            planet("D", Some(2018), Some(2.5), Some(120.0)),
        ]
    }

    #[test]
    fn sort_by_discovery_newest_first_missing_last() {
        let mut records = sample();
        sort_planets(&mut records, SortKey::Discovery);
        assert_eq!(names(&records), vec!["C", "D", "A", "B"]);
    }

    #[test]
    fn sort_by_distance_nearest_first_missing_last() {
        let mut records = sample();
        sort_planets(&mut records, SortKey::Distance);
        assert_eq!(names(&records), vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn sort_by_radius_largest_first_missing_last() {
        let mut records = sample();
        sort_planets(&mut records, SortKey::Radius);
        assert_eq!(names(&records), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut records = vec![
            planet("first", Some(2020), None, None),
            planet("second", Some(2020), None, None),
        ];
        sort_planets(&mut records, SortKey::Discovery);
        assert_eq!(names(&records), vec!["first", "second"]);
    }

    #[test]
    fn sort_key_display_matches_name() {
        assert_eq!(SortKey::Period.to_string(), "period");
        assert_eq!(SortKey::Discovery.as_str(), "discovery");
    }

    #[test]
    fn filter_by_name_is_case_insensitive() {
        let records = vec![
            planet("Kepler-22b", None, None, None),
            planet("WASP-12b", None, None, None),
        ];
        let filter = PlanetFilter {
            name_contains: Some("kepler".to_string()),
            ..PlanetFilter::default()
        };
        assert_eq!(names(&filter.apply(&records)), vec!["Kepler-22b"]);
    }

    #[test]
    fn filter_by_year_and_type() {
        let filter = PlanetFilter {
            discovery_year: Some(2018),
            types: vec![PlanetType::MiniNeptune],
            ..PlanetFilter::default()
        };
        assert_eq!(names(&filter.apply(&sample())), vec!["D"]);
    }

    #[test]
    fn default_filter_keeps_everything() {
        assert_eq!(PlanetFilter::default().apply(&sample()).len(), 4);
    }

    #[test]
    fn habitable_candidates_sorted_by_score() {
        let mut low = planet("low", None, Some(1.0), None);
        low.habitability_score = 55;
        let mut high = planet("high", None, Some(1.0), None);
        high.habitability_score = 90;
        let mut out = planet("out", None, Some(1.0), None);
        out.habitability_score = 49;

        let result = habitable_candidates(&[low, out, high], HABITABLE_THRESHOLD);
        assert_eq!(names(&result), vec!["high", "low"]);
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn random_sample_is_a_subset_of_the_listing() {
        let records = sample();
        let picked = random_sample(&records, 3, &mut seeded(7));

        assert_eq!(picked.len(), 3);
        for planet in &picked {
            assert!(records.contains(planet), "{} not in listing", planet.name);
        }
        let mut picked_names = names(&picked);
        picked_names.sort_unstable();
        picked_names.dedup();
        assert_eq!(picked_names.len(), 3);
    }

    #[test]
    fn random_sample_size_is_capped_by_listing() {
        let records = sample();
        assert_eq!(random_sample(&records, 50, &mut seeded(1)).len(), 4);
        assert!(random_sample(&records, 0, &mut seeded(1)).is_empty());
        assert!(random_sample(&[], 50, &mut seeded(1)).is_empty());
    }

    #[test]
    fn random_sample_is_deterministic_for_a_seed() {
        let records = sample();
        let first = random_sample(&records, 2, &mut seeded(42));
        let second = random_sample(&records, 2, &mut seeded(42));
        assert_eq!(first, second);
    }

    #[test]
    fn full_random_sample_is_a_permutation() {
        let records = sample();
        let mut shuffled = names(&random_sample(&records, records.len(), &mut seeded(3)))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        shuffled.sort();
        assert_eq!(shuffled, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn stats_count_categories() {
        let stats = CatalogStats::from_records(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.earth_sized, 1);
        assert_eq!(stats.potentially_habitable, 0);
        assert_eq!(stats.by_type.get("Gas Giant"), Some(&1));
        assert_eq!(stats.by_type.get("Unknown"), Some(&1));
        assert_eq!(stats.by_type.get("Terrestrial"), Some(&1));
    }

    #[test]
    fn stats_for_empty_listing() {
        assert_eq!(CatalogStats::from_records(&[]), CatalogStats::default());
    }
}
