//! Read-only aggregation views over a generated dataset.
//!
//! These are the shapes the dashboard actually renders: a flattened
//! per-bank list for the map, a headline stats block, and per-state
//! rollups for the state-wise table.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::geo::GeoCoordinate;
use crate::model::GeneratedDataset;

/// Share of verified pensioners assumed to have verified online.
const ONLINE_SHARE: f64 = 0.68;
/// Share of the population flagged for manual review.
const FLAGGED_SHARE: f64 = 0.001;

/// One bank branch flattened for map rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub state: String,
    pub district: String,
    pub location: String,
    pub bank_name: String,
    pub coordinates: GeoCoordinate,
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    /// Percentage completed, rounded to one decimal
    pub completion_rate: f64,
}

/// Headline statistics block consumed by dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_pensioners: u64,
    pub verified_this_month: u64,
    pub pending_verification: u64,
    pub flagged_profiles: u64,
    pub total_verifications: u64,
    pub online_verifications: u64,
    pub offline_verifications: u64,
    /// Percentage verified, rounded to one decimal
    pub success_rate: f64,
    pub last_updated: String,
}

/// One age group's share of the national population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDistribution {
    /// Age-group label from the catalog
    pub age_group: String,
    pub count: u64,
}

/// Per-state rollup for the state-wise table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSummary {
    pub state: String,
    pub total_pensioners: u64,
    pub verified: u64,
    pub pending: u64,
    pub total_districts: usize,
    pub total_locations: usize,
    pub total_banks: usize,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Flattens every bank in the dataset into a map point.
pub fn map_points(dataset: &GeneratedDataset) -> Vec<MapPoint> {
    let mut points = Vec::new();
    for state in &dataset.states {
        for district in &state.districts {
            for location in &district.locations {
                for bank in &location.banks {
                    let completion_rate = if bank.total == 0 {
                        0.0
                    } else {
                        round1(bank.completed as f64 / bank.total as f64 * 100.0)
                    };
                    points.push(MapPoint {
                        state: state.state.clone(),
                        district: district.district.clone(),
                        location: location.location.clone(),
                        bank_name: bank.bank_name.clone(),
                        coordinates: bank.geo_coordinates,
                        total: bank.total,
                        completed: bank.completed,
                        pending: bank.pending,
                        completion_rate,
                    });
                }
            }
        }
    }
    points
}

/// Derives the headline stats block from per-bank counts.
pub fn stats(dataset: &GeneratedDataset) -> StatsSummary {
    let mut total = 0u64;
    let mut completed = 0u64;
    let mut pending = 0u64;
    for state in &dataset.states {
        for district in &state.districts {
            for location in &district.locations {
                for bank in &location.banks {
                    total += bank.total;
                    completed += bank.completed;
                    pending += bank.pending;
                }
            }
        }
    }

    let online = (completed as f64 * ONLINE_SHARE).floor() as u64;
    let success_rate = if total == 0 {
        0.0
    } else {
        round1(completed as f64 / total as f64 * 100.0)
    };

    StatsSummary {
        total_pensioners: total,
        verified_this_month: completed,
        pending_verification: pending,
        flagged_profiles: (total as f64 * FLAGGED_SHARE).floor() as u64,
        total_verifications: completed,
        online_verifications: online,
        offline_verifications: completed - online,
        success_rate,
        last_updated: dataset.generated_at.clone(),
    }
}

/// Folds per-bank age-group stats into one row per catalog label.
///
/// Rows come out in catalog order; a label no bank drew still appears with
/// a zero count, so the chart's axis is stable across datasets.
pub fn age_distribution(dataset: &GeneratedDataset) -> Vec<AgeDistribution> {
    let mut counts = [0u64; catalog::AGE_GROUPS.len()];
    for state in &dataset.states {
        for district in &state.districts {
            for location in &district.locations {
                for bank in &location.banks {
                    for group in &bank.age_group_stats {
                        if let Some(i) = catalog::AGE_GROUPS
                            .iter()
                            .position(|label| *label == group.age_group)
                        {
                            counts[i] += group.total;
                        }
                    }
                }
            }
        }
    }

    catalog::AGE_GROUPS
        .iter()
        .zip(counts)
        .map(|(label, count)| AgeDistribution {
            age_group: label.to_string(),
            count,
        })
        .collect()
}

/// Rolls the dataset up per state.
pub fn state_summaries(dataset: &GeneratedDataset) -> Vec<StateSummary> {
    dataset
        .states
        .iter()
        .map(|state| {
            let mut summary = StateSummary {
                state: state.state.clone(),
                total_pensioners: 0,
                verified: 0,
                pending: 0,
                total_districts: state.districts.len(),
                total_locations: 0,
                total_banks: 0,
            };
            for district in &state.districts {
                summary.total_locations += district.locations.len();
                for location in &district.locations {
                    summary.total_banks += location.banks.len();
                    for bank in &location.banks {
                        summary.total_pensioners += bank.total;
                        summary.verified += bank.completed;
                        summary.pending += bank.pending;
                    }
                }
            }
            summary
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenConfig, Generator};

    fn dataset() -> GeneratedDataset {
        Generator::from_seed(1234, GenConfig::default())
            .unwrap()
            .generate()
            .unwrap()
    }

    #[test]
    fn test_stats_are_internally_consistent() {
        let dataset = dataset();
        let stats = stats(&dataset);

        assert_eq!(
            stats.total_pensioners,
            stats.verified_this_month + stats.pending_verification
        );
        assert_eq!(
            stats.total_verifications,
            stats.online_verifications + stats.offline_verifications
        );
        assert!(stats.success_rate >= 0.0 && stats.success_rate <= 100.0);
        assert_eq!(stats.last_updated, dataset.generated_at);
    }

    #[test]
    fn test_map_points_cover_every_bank() {
        let dataset = dataset();
        let expected: usize = dataset
            .states
            .iter()
            .flat_map(|s| &s.districts)
            .flat_map(|d| &d.locations)
            .map(|l| l.banks.len())
            .sum();

        let points = map_points(&dataset);
        assert_eq!(points.len(), expected);
        for point in &points {
            assert_eq!(point.total, point.completed + point.pending);
            assert!(point.coordinates.in_bounds());
            assert!((0.0..=100.0).contains(&point.completion_rate));
        }
    }

    #[test]
    fn test_age_distribution_covers_catalog_and_sums_to_total() {
        let dataset = dataset();
        let rows = age_distribution(&dataset);

        assert_eq!(rows.len(), catalog::AGE_GROUPS.len());
        for (row, label) in rows.iter().zip(catalog::AGE_GROUPS) {
            assert_eq!(row.age_group, label);
        }

        let total: u64 = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, stats(&dataset).total_pensioners);
    }

    #[test]
    fn test_state_summaries_match_dataset_totals() {
        let dataset = dataset();
        let summaries = state_summaries(&dataset);
        assert_eq!(summaries.len(), dataset.total_states);

        let districts: usize = summaries.iter().map(|s| s.total_districts).sum();
        let locations: usize = summaries.iter().map(|s| s.total_locations).sum();
        assert_eq!(districts, dataset.total_districts);
        assert_eq!(locations, dataset.total_locations);

        let overall = stats(&dataset);
        let total: u64 = summaries.iter().map(|s| s.total_pensioners).sum();
        assert_eq!(total, overall.total_pensioners);
    }
}
