//! Generated dataset value types.
//!
//! Every struct here is a plain immutable record built in one generation
//! pass. JSON field names match what the dashboard's chart components
//! expect, so the serialized form is the external contract.

use serde::{Deserialize, Serialize};

use crate::geo::GeoCoordinate;

/// Root of one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDataset {
    /// Country tag, always "India"
    pub country: String,
    /// States in catalog order
    pub states: Vec<StateBlock>,
    /// RFC 3339 generation timestamp
    pub generated_at: String,
    /// Number of states
    pub total_states: usize,
    /// Sum of district counts across states
    pub total_districts: usize,
    /// Sum of location counts across all districts
    pub total_locations: usize,
}

/// A state and its generated districts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateBlock {
    /// State name from the catalog
    pub state: String,
    /// Districts in catalog order
    pub districts: Vec<DistrictBlock>,
}

/// A district and its synthesized locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictBlock {
    /// District name from the state's catalog
    pub district: String,
    /// 2-4 locations per district by default
    pub locations: Vec<LocationBlock>,
}

/// A synthesized location within a district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationBlock {
    /// Synthesized label, e.g. "Lucknow East"
    pub location: String,
    /// Random 6-digit pincode, not validated against any registry
    pub pincode: String,
    /// 1-3 banks per location by default
    pub banks: Vec<BankRecord>,
}

/// A bank branch and its verification statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    /// Synthetic id, "B1000".."B9999"
    pub bank_id: String,
    /// Bank name from the catalog
    pub bank_name: String,
    /// Branch label derived from the location
    pub branch_name: String,
    /// Jittered coordinate near the district's base city
    pub geo_coordinates: GeoCoordinate,
    /// Registered pensioners at this branch
    pub total: u64,
    /// Verifications completed
    pub completed: u64,
    /// Verifications outstanding; completed + pending == total
    pub pending: u64,
    /// Per-age-group breakdown summing to this record's counts
    pub age_group_stats: Vec<AgeGroupStat>,
    /// Per-method breakdown summing to this record's counts
    pub verification_methods: MethodBreakdown,
}

/// Statistics for one age group within a bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGroupStat {
    /// Age-group label from the catalog
    pub age_group: String,
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    /// Per-category breakdown summing to this group's counts
    pub categories: Vec<CategoryStat>,
    /// Per-method breakdown summing to this group's counts
    pub verification_methods: MethodBreakdown,
}

/// Statistics for one pensioner category within an age group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    /// Category label from the catalog
    pub category: String,
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    /// Gender split summing to this category's counts
    pub gender_stats: GenderStats,
}

/// Male/female split of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderStats {
    pub male: GenderSlice,
    pub female: GenderSlice,
}

/// One gender's share of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderSlice {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    /// Synthetic contact numbers, one per pending individual; presentation
    /// filler attached only when pending > 0 and enabled in config
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_numbers: Option<Vec<String>>,
}

/// Verification-method breakdown in the catalog's fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodBreakdown {
    pub fingerprint: MethodCount,
    pub iris: MethodCount,
    pub face: MethodCount,
    #[serde(rename = "OTP")]
    pub otp: MethodCount,
}

/// Counts for a single verification method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCount {
    pub total: u64,
    pub completed: u64,
}

impl MethodBreakdown {
    /// Sums of (total, completed) across the four methods.
    pub fn sums(&self) -> (u64, u64) {
        let parts = [&self.fingerprint, &self.iris, &self.face, &self.otp];
        (
            parts.iter().map(|m| m.total).sum(),
            parts.iter().map(|m| m.completed).sum(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_field_keeps_uppercase_spelling() {
        let breakdown = MethodBreakdown {
            fingerprint: MethodCount { total: 4, completed: 3 },
            iris: MethodCount { total: 3, completed: 2 },
            face: MethodCount { total: 2, completed: 1 },
            otp: MethodCount { total: 1, completed: 1 },
        };
        let json = serde_json::to_value(&breakdown).unwrap();
        assert!(json.get("otp").is_none());
        for method in crate::catalog::VERIFICATION_METHODS {
            assert!(json.get(method).is_some(), "missing key {method}");
        }
    }

    #[test]
    fn test_pending_numbers_omitted_when_absent() {
        let slice = GenderSlice {
            total: 10,
            completed: 10,
            pending: 0,
            pending_numbers: None,
        };
        let json = serde_json::to_value(&slice).unwrap();
        assert!(json.get("pending_numbers").is_none());

        let slice = GenderSlice {
            pending: 1,
            completed: 9,
            pending_numbers: Some(vec!["9123456789".to_string()]),
            ..slice
        };
        let json = serde_json::to_value(&slice).unwrap();
        assert_eq!(json["pending_numbers"][0], "9123456789");
    }

    #[test]
    fn test_method_breakdown_sums() {
        let breakdown = MethodBreakdown {
            fingerprint: MethodCount { total: 5, completed: 4 },
            iris: MethodCount { total: 0, completed: 0 },
            face: MethodCount { total: 7, completed: 6 },
            otp: MethodCount { total: 3, completed: 3 },
        };
        assert_eq!(breakdown.sums(), (15, 13));
    }
}
