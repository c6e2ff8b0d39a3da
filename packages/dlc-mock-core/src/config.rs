//! Generator configuration.

use crate::error::GenError;
use crate::partition::FractionRange;

/// Tunables for one generation pass.
///
/// Count ranges are inclusive on both ends; value ranges are half-open.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Locations per district (inclusive)
    pub locations_per_district: (u32, u32),
    /// Banks per location (inclusive)
    pub banks_per_location: (u32, u32),
    /// Pensioners per bank (half-open)
    pub bank_total: (u64, u64),
    /// Bank-level completion fraction (half-open)
    pub completion: FractionRange,
    /// Age groups per bank (inclusive)
    pub age_groups_per_bank: (u32, u32),
    /// Fraction range for age-group splits
    pub age_group_fraction: FractionRange,
    /// Categories per age group (inclusive)
    pub categories_per_age_group: (u32, u32),
    /// Fraction range for category splits
    pub category_fraction: FractionRange,
    /// Fraction range for the male share of a gender split
    pub male_fraction: FractionRange,
    /// Fraction range for verification-method splits
    pub method_fraction: FractionRange,
    /// Coordinate jitter half-width in degrees
    pub coordinate_jitter: f64,
    /// Attach synthetic phone numbers to pending gender slices
    pub attach_pending_numbers: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            locations_per_district: (2, 4),
            banks_per_location: (1, 3),
            bank_total: (100, 400),
            completion: FractionRange { lo: 0.80, hi: 0.95 },
            age_groups_per_bank: (2, 4),
            age_group_fraction: FractionRange { lo: 0.2, hi: 0.6 },
            categories_per_age_group: (2, 4),
            category_fraction: FractionRange { lo: 0.15, hi: 0.55 },
            male_fraction: FractionRange { lo: 0.4, hi: 0.8 },
            method_fraction: FractionRange { lo: 0.2, hi: 0.6 },
            coordinate_jitter: 0.02,
            attach_pending_numbers: true,
        }
    }
}

impl GenConfig {
    /// Rejects configurations the generator cannot honor.
    pub fn validate(&self) -> Result<(), GenError> {
        for (name, (lo, hi)) in [
            ("locations_per_district", self.locations_per_district),
            ("banks_per_location", self.banks_per_location),
            ("age_groups_per_bank", self.age_groups_per_bank),
            ("categories_per_age_group", self.categories_per_age_group),
        ] {
            if lo == 0 || lo > hi {
                return Err(GenError::InvalidConfig {
                    reason: format!("{name} range ({lo}, {hi}) must satisfy 1 <= lo <= hi"),
                });
            }
        }
        if self.age_groups_per_bank.1 as usize > crate::catalog::AGE_GROUPS.len() {
            return Err(GenError::InvalidConfig {
                reason: format!(
                    "age_groups_per_bank upper bound {} exceeds catalog size {}",
                    self.age_groups_per_bank.1,
                    crate::catalog::AGE_GROUPS.len()
                ),
            });
        }
        if self.categories_per_age_group.1 as usize > crate::catalog::CATEGORIES.len() {
            return Err(GenError::InvalidConfig {
                reason: format!(
                    "categories_per_age_group upper bound {} exceeds catalog size {}",
                    self.categories_per_age_group.1,
                    crate::catalog::CATEGORIES.len()
                ),
            });
        }
        if self.bank_total.0 >= self.bank_total.1 {
            return Err(GenError::InvalidConfig {
                reason: format!(
                    "bank_total range ({}, {}) must satisfy lo < hi",
                    self.bank_total.0, self.bank_total.1
                ),
            });
        }
        if !(self.coordinate_jitter.is_finite() && self.coordinate_jitter >= 0.0) {
            return Err(GenError::InvalidConfig {
                reason: format!("coordinate_jitter {} must be finite and >= 0", self.coordinate_jitter),
            });
        }
        for range in [
            self.completion,
            self.age_group_fraction,
            self.category_fraction,
            self.male_fraction,
            self.method_fraction,
        ] {
            range.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        GenConfig::default().validate().unwrap();
    }

    #[test]
    fn test_zero_count_rejected() {
        let config = GenConfig {
            banks_per_location: (0, 3),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_oversized_age_group_count_rejected() {
        let config = GenConfig {
            age_groups_per_bank: (2, 9),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_fraction_range_rejected() {
        let config = GenConfig {
            completion: FractionRange { lo: 0.9, hi: 0.5 },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(GenError::InvalidFractionRange { lo: 0.9, hi: 0.5 })
        );
    }
}
