//! Hierarchy builder composing the partitioner and geo resolver.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog;
use crate::config::GenConfig;
use crate::error::GenError;
use crate::geo;
use crate::model::{
    AgeGroupStat, BankRecord, CategoryStat, DistrictBlock, GeneratedDataset, GenderSlice,
    GenderStats, LocationBlock, MethodBreakdown, MethodCount, StateBlock,
};
use crate::partition::{draw_completed, partition, partition_completed};

/// Seedable dataset generator.
///
/// One instance owns its random stream; independent instances share nothing
/// but the immutable catalogs, so calls may run concurrently from separate
/// instances.
pub struct Generator {
    rng: ChaCha8Rng,
    config: GenConfig,
}

impl Generator {
    /// Creates an entropy-seeded generator.
    pub fn new(config: GenConfig) -> Result<Self, GenError> {
        config.validate()?;
        Ok(Self {
            rng: ChaCha8Rng::from_entropy(),
            config,
        })
    }

    /// Creates a generator whose output is fully determined by `seed`.
    pub fn from_seed(seed: u64, config: GenConfig) -> Result<Self, GenError> {
        config.validate()?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
        })
    }

    /// Runs one generation pass over the full state catalog.
    ///
    /// The result is fully materialized; nothing is cached between calls and
    /// repeated calls on an entropy-seeded generator differ run to run.
    pub fn generate(&mut self) -> Result<GeneratedDataset, GenError> {
        let mut states = Vec::with_capacity(catalog::STATES.len());
        for entry in &catalog::STATES {
            states.push(self.state_block(entry)?);
        }

        let total_states = states.len();
        let total_districts = states.iter().map(|s| s.districts.len()).sum();
        let total_locations = states
            .iter()
            .flat_map(|s| &s.districts)
            .map(|d| d.locations.len())
            .sum();

        tracing::debug!(total_states, total_districts, total_locations, "generated dataset");

        Ok(GeneratedDataset {
            country: "India".to_string(),
            states,
            generated_at: Utc::now().to_rfc3339(),
            total_states,
            total_districts,
            total_locations,
        })
    }

    fn state_block(&mut self, entry: &catalog::StateEntry) -> Result<StateBlock, GenError> {
        let mut districts = Vec::with_capacity(entry.districts.len());
        for district in entry.districts {
            districts.push(self.district_block(district, entry.name)?);
        }
        Ok(StateBlock {
            state: entry.name.to_string(),
            districts,
        })
    }

    fn district_block(&mut self, district: &str, state: &str) -> Result<DistrictBlock, GenError> {
        let (lo, hi) = self.config.locations_per_district;
        let count = self.rng.gen_range(lo..=hi) as usize;

        let mut locations = Vec::with_capacity(count);
        for i in 0..count {
            let suffix = catalog::LOCATION_SUFFIXES.get(i).unwrap_or(&"Main");
            let location = format!("{district} {suffix}");
            let pincode = self.rng.gen_range(100_000..1_000_000u32).to_string();
            let banks = self.banks(&location, district, state)?;
            locations.push(LocationBlock {
                location,
                pincode,
                banks,
            });
        }

        Ok(DistrictBlock {
            district: district.to_string(),
            locations,
        })
    }

    fn banks(
        &mut self,
        location: &str,
        district: &str,
        state: &str,
    ) -> Result<Vec<BankRecord>, GenError> {
        let (lo, hi) = self.config.banks_per_location;
        let count = self.rng.gen_range(lo..=hi) as usize;

        let mut banks = Vec::with_capacity(count);
        for _ in 0..count {
            let bank_name = catalog::BANK_NAMES
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(catalog::BANK_NAMES[0]);
            let suffix = catalog::BRANCH_SUFFIXES
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(catalog::BRANCH_SUFFIXES[0]);

            let (total_lo, total_hi) = self.config.bank_total;
            let total = self.rng.gen_range(total_lo..total_hi);
            let completed = draw_completed(&mut self.rng, total, self.config.completion);
            let pending = total - completed;

            let age_group_stats = self.age_group_stats(total, completed)?;
            let verification_methods = self.method_breakdown(total, completed)?;
            let geo_coordinates = geo::resolve(
                district,
                state,
                self.config.coordinate_jitter,
                &mut self.rng,
            );

            banks.push(BankRecord {
                bank_id: format!("B{}", self.rng.gen_range(1000..10_000u32)),
                bank_name: bank_name.to_string(),
                branch_name: format!("{location} {suffix}"),
                geo_coordinates,
                total,
                completed,
                pending,
                age_group_stats,
                verification_methods,
            });
        }

        Ok(banks)
    }

    fn age_group_stats(&mut self, total: u64, completed: u64) -> Result<Vec<AgeGroupStat>, GenError> {
        let (lo, hi) = self.config.age_groups_per_bank;
        let count = self.rng.gen_range(lo..=hi) as usize;
        let labels: Vec<&str> = catalog::AGE_GROUPS
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect();

        let totals = partition(&mut self.rng, total, count, self.config.age_group_fraction)?;
        let completeds = partition_completed(&totals, completed)?;

        let mut stats = Vec::with_capacity(count);
        for ((label, group_total), group_completed) in labels.into_iter().zip(totals).zip(completeds)
        {
            let categories = self.category_stats(group_total, group_completed)?;
            let verification_methods = self.method_breakdown(group_total, group_completed)?;
            stats.push(AgeGroupStat {
                age_group: label.to_string(),
                total: group_total,
                completed: group_completed,
                pending: group_total - group_completed,
                categories,
                verification_methods,
            });
        }
        Ok(stats)
    }

    fn category_stats(&mut self, total: u64, completed: u64) -> Result<Vec<CategoryStat>, GenError> {
        let (lo, hi) = self.config.categories_per_age_group;
        let count = self.rng.gen_range(lo..=hi) as usize;
        let labels: Vec<&str> = catalog::CATEGORIES
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect();

        let totals = partition(&mut self.rng, total, count, self.config.category_fraction)?;
        let completeds = partition_completed(&totals, completed)?;

        let mut stats = Vec::with_capacity(count);
        for ((label, cat_total), cat_completed) in labels.into_iter().zip(totals).zip(completeds) {
            let gender_stats = self.gender_stats(cat_total, cat_completed)?;
            stats.push(CategoryStat {
                category: label.to_string(),
                total: cat_total,
                completed: cat_completed,
                pending: cat_total - cat_completed,
                gender_stats,
            });
        }
        Ok(stats)
    }

    fn gender_stats(&mut self, total: u64, completed: u64) -> Result<GenderStats, GenError> {
        let totals = partition(&mut self.rng, total, 2, self.config.male_fraction)?;
        let completeds = partition_completed(&totals, completed)?;

        let male = self.gender_slice(totals[0], completeds[0]);
        let female = self.gender_slice(totals[1], completeds[1]);
        Ok(GenderStats { male, female })
    }

    fn gender_slice(&mut self, total: u64, completed: u64) -> GenderSlice {
        let pending = total - completed;
        let pending_numbers = if pending > 0 && self.config.attach_pending_numbers {
            Some(self.phone_numbers(pending as usize))
        } else {
            None
        };
        GenderSlice {
            total,
            completed,
            pending,
            pending_numbers,
        }
    }

    /// Synthetic mobile numbers: `9` followed by nine digits, no leading
    /// zero in the tail.
    fn phone_numbers(&mut self, count: usize) -> Vec<String> {
        (0..count)
            .map(|_| format!("9{}", self.rng.gen_range(100_000_000..1_000_000_000u64)))
            .collect()
    }

    fn method_breakdown(&mut self, total: u64, completed: u64) -> Result<MethodBreakdown, GenError> {
        let totals = partition(&mut self.rng, total, 4, self.config.method_fraction)?;
        let completeds = partition_completed(&totals, completed)?;

        let mut counts = totals
            .into_iter()
            .zip(completeds)
            .map(|(total, completed)| MethodCount { total, completed });

        // Catalog order: fingerprint, iris, face, OTP.
        Ok(MethodBreakdown {
            fingerprint: counts.next().unwrap_or(MethodCount { total: 0, completed: 0 }),
            iris: counts.next().unwrap_or(MethodCount { total: 0, completed: 0 }),
            face: counts.next().unwrap_or(MethodCount { total: 0, completed: 0 }),
            otp: counts.next().unwrap_or(MethodCount { total: 0, completed: 0 }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let config = GenConfig {
            bank_total: (400, 100),
            ..Default::default()
        };
        assert!(Generator::from_seed(1, config).is_err());
    }

    #[test]
    fn test_gender_split_preserves_counts() {
        let mut generator = Generator::from_seed(21, GenConfig::default()).unwrap();
        for _ in 0..100 {
            let total = generator.rng.gen_range(0..300u64);
            let completed = if total == 0 {
                0
            } else {
                generator.rng.gen_range(0..=total)
            };
            let stats = generator.gender_stats(total, completed).unwrap();
            assert_eq!(stats.male.total + stats.female.total, total);
            assert_eq!(stats.male.completed + stats.female.completed, completed);
            assert_eq!(stats.male.total, stats.male.completed + stats.male.pending);
            assert_eq!(
                stats.female.total,
                stats.female.completed + stats.female.pending
            );
        }
    }

    #[test]
    fn test_method_breakdown_preserves_counts() {
        let mut generator = Generator::from_seed(8, GenConfig::default()).unwrap();
        let breakdown = generator.method_breakdown(250, 210).unwrap();
        assert_eq!(breakdown.sums(), (250, 210));
    }

    #[test]
    fn test_phone_number_format() {
        let mut generator = Generator::from_seed(3, GenConfig::default()).unwrap();
        for number in generator.phone_numbers(50) {
            assert_eq!(number.len(), 10);
            assert!(number.starts_with('9'));
            assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
