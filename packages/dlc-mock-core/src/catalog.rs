//! Fixed catalogs the generator draws from.
//!
//! All tables are immutable constants; the generator only ever reads them,
//! so independent generation calls share no mutable state.

/// A state and its fixed district list.
#[derive(Debug, Clone, Copy)]
pub struct StateEntry {
    /// State name
    pub name: &'static str,
    /// Six districts per state
    pub districts: [&'static str; 6],
}

/// The 10-state catalog the dashboard covers.
pub const STATES: [StateEntry; 10] = [
    StateEntry {
        name: "Uttar Pradesh",
        districts: [
            "Kanpur Nagar",
            "Lucknow",
            "Agra",
            "Varanasi",
            "Allahabad",
            "Meerut",
        ],
    },
    StateEntry {
        name: "Maharashtra",
        districts: ["Mumbai", "Pune", "Nagpur", "Nashik", "Aurangabad", "Solapur"],
    },
    StateEntry {
        name: "Bihar",
        districts: [
            "Patna",
            "Gaya",
            "Bhagalpur",
            "Muzaffarpur",
            "Darbhanga",
            "Purnia",
        ],
    },
    StateEntry {
        name: "West Bengal",
        districts: [
            "Kolkata",
            "Howrah",
            "Darjeeling",
            "Jalpaiguri",
            "Malda",
            "Murshidabad",
        ],
    },
    StateEntry {
        name: "Madhya Pradesh",
        districts: ["Bhopal", "Indore", "Jabalpur", "Gwalior", "Ujjain", "Sagar"],
    },
    StateEntry {
        name: "Tamil Nadu",
        districts: [
            "Chennai",
            "Coimbatore",
            "Madurai",
            "Tiruchirappalli",
            "Salem",
            "Tirunelveli",
        ],
    },
    StateEntry {
        name: "Rajasthan",
        districts: ["Jaipur", "Jodhpur", "Kota", "Bikaner", "Ajmer", "Udaipur"],
    },
    StateEntry {
        name: "Karnataka",
        districts: [
            "Bangalore",
            "Mysore",
            "Hubli",
            "Mangalore",
            "Belgaum",
            "Gulbarga",
        ],
    },
    StateEntry {
        name: "Gujarat",
        districts: [
            "Ahmedabad",
            "Surat",
            "Vadodara",
            "Rajkot",
            "Bhavnagar",
            "Jamnagar",
        ],
    },
    StateEntry {
        name: "Andhra Pradesh",
        districts: [
            "Hyderabad",
            "Visakhapatnam",
            "Vijayawada",
            "Guntur",
            "Nellore",
            "Kurnool",
        ],
    },
];

/// Banks a branch can belong to.
pub const BANK_NAMES: [&str; 14] = [
    "State Bank of India",
    "Punjab National Bank",
    "Bank of Baroda",
    "Canara Bank",
    "Union Bank of India",
    "Bank of India",
    "Central Bank of India",
    "Indian Overseas Bank",
    "UCO Bank",
    "Bank of Maharashtra",
    "HDFC Bank",
    "ICICI Bank",
    "Axis Bank",
    "Kotak Mahindra Bank",
];

/// Pensioner service categories.
pub const CATEGORIES: [&str; 5] = ["Defence", "Civil", "Railways", "Telecom", "Postal"];

/// Age-group labels.
pub const AGE_GROUPS: [&str; 5] = ["60-65", "66-70", "71-75", "76-80", "Above 80"];

/// Verification methods, in the fixed order the k=4 split uses.
pub const VERIFICATION_METHODS: [&str; 4] = ["fingerprint", "iris", "face", "OTP"];

/// Branch name suffixes.
pub const BRANCH_SUFFIXES: [&str; 4] = ["Main", "Central", "Branch", "Regional"];

/// Location name suffixes, indexed by position within a district.
pub const LOCATION_SUFFIXES: [&str; 5] = ["Central", "East", "West", "North", "South"];

/// A city with exact coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// City name
    pub name: &'static str,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// Major cities with exact coordinates. Iteration order is the tie-break
/// for fuzzy matches, so the order here is load-bearing.
pub const CITIES: [City; 20] = [
    City { name: "Mumbai", lat: 19.076, lng: 72.8777 },
    City { name: "Delhi", lat: 28.7041, lng: 77.1025 },
    City { name: "Bangalore", lat: 12.9716, lng: 77.5946 },
    City { name: "Hyderabad", lat: 17.385, lng: 78.4867 },
    City { name: "Chennai", lat: 13.0827, lng: 80.2707 },
    City { name: "Kolkata", lat: 22.5726, lng: 88.3639 },
    City { name: "Pune", lat: 18.5204, lng: 73.8567 },
    City { name: "Ahmedabad", lat: 23.0225, lng: 72.5714 },
    City { name: "Jaipur", lat: 26.9124, lng: 75.7873 },
    City { name: "Surat", lat: 21.1702, lng: 72.8311 },
    City { name: "Lucknow", lat: 26.8467, lng: 80.9462 },
    City { name: "Kanpur", lat: 26.4499, lng: 80.3319 },
    City { name: "Nagpur", lat: 21.1458, lng: 79.0882 },
    City { name: "Indore", lat: 22.7196, lng: 75.8577 },
    City { name: "Thane", lat: 19.2183, lng: 72.9781 },
    City { name: "Bhopal", lat: 23.2599, lng: 77.4126 },
    City { name: "Visakhapatnam", lat: 17.6868, lng: 83.2185 },
    City { name: "Pimpri", lat: 18.6298, lng: 73.7997 },
    City { name: "Patna", lat: 25.5941, lng: 85.1376 },
    City { name: "Vadodara", lat: 22.3072, lng: 73.1812 },
];

/// One representative city per state, used when no city matches a district.
pub const STATE_FALLBACKS: [(&str, &str); 10] = [
    ("Uttar Pradesh", "Lucknow"),
    ("Maharashtra", "Mumbai"),
    ("Bihar", "Patna"),
    ("West Bengal", "Kolkata"),
    ("Madhya Pradesh", "Bhopal"),
    ("Tamil Nadu", "Chennai"),
    ("Rajasthan", "Jaipur"),
    ("Karnataka", "Bangalore"),
    ("Gujarat", "Ahmedabad"),
    ("Andhra Pradesh", "Hyderabad"),
];

/// Looks up a city by exact name.
pub fn city_by_name(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.name == name)
}

/// Looks up the fallback city for a state.
pub fn fallback_city(state: &str) -> Option<&'static City> {
    STATE_FALLBACKS
        .iter()
        .find(|(s, _)| *s == state)
        .and_then(|(_, city)| city_by_name(city))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_has_six_districts() {
        assert_eq!(STATES.len(), 10);
        for state in &STATES {
            assert_eq!(state.districts.len(), 6, "state {}", state.name);
        }
    }

    #[test]
    fn test_every_fallback_city_exists_in_city_catalog() {
        for (state, city) in &STATE_FALLBACKS {
            assert!(
                city_by_name(city).is_some(),
                "fallback {} for {} missing from CITIES",
                city,
                state
            );
        }
    }

    #[test]
    fn test_fallback_city_lookup() {
        let lucknow = fallback_city("Uttar Pradesh").unwrap();
        assert_eq!(lucknow.name, "Lucknow");
        assert!(fallback_city("Atlantis").is_none());
    }
}
