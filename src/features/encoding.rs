//! Categorical encoding tables
//!
//! Airport and airline codes are mapped to the integer indices the models
//! were trained with. The trained encoder assigned each code its
//! lexicographic rank within the table, so both tables below are kept
//! sorted by code and the index of an entry IS its encoding. Changing
//! table contents or order invalidates every trained artifact.

/// An airport reference entry
#[derive(Debug, Clone, Copy)]
pub struct Airport {
    /// IATA code
    pub code: &'static str,
    /// City served
    pub city: &'static str,
    /// State abbreviation
    pub state: &'static str,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// An airline reference entry
#[derive(Debug, Clone, Copy)]
pub struct Airline {
    /// IATA code
    pub code: &'static str,
    /// Display name
    pub name: &'static str,
}

/// Airports known at training time, sorted by code
pub static AIRPORTS: [Airport; 25] = [
    Airport { code: "ATL", city: "Atlanta", state: "GA", lat: 33.6367, lon: -84.4281 },
    Airport { code: "BOS", city: "Boston", state: "MA", lat: 42.362, lon: -71.0079 },
    Airport { code: "BWI", city: "Baltimore", state: "MD", lat: 39.1754, lon: -76.6683 },
    Airport { code: "CLT", city: "Charlotte", state: "NC", lat: 35.214, lon: -80.9431 },
    Airport { code: "DCA", city: "Washington Reagan", state: "DC", lat: 38.8521, lon: -77.0377 },
    Airport { code: "DEN", city: "Denver", state: "CO", lat: 39.8617, lon: -104.673 },
    Airport { code: "DFW", city: "Dallas/Fort Worth", state: "TX", lat: 32.8968, lon: -97.038 },
    Airport { code: "DTW", city: "Detroit", state: "MI", lat: 42.2138, lon: -83.3538 },
    Airport { code: "EWR", city: "Newark", state: "NJ", lat: 40.6925, lon: -74.1687 },
    Airport { code: "IAH", city: "Houston", state: "TX", lat: 29.9844, lon: -95.3414 },
    Airport { code: "JFK", city: "New York JFK", state: "NY", lat: 40.6394, lon: -73.7793 },
    Airport { code: "LAS", city: "Las Vegas", state: "NV", lat: 36.0834, lon: -115.1518 },
    Airport { code: "LAX", city: "Los Angeles", state: "CA", lat: 33.9425, lon: -118.408 },
    Airport { code: "LGA", city: "New York LaGuardia", state: "NY", lat: 40.7772, lon: -73.8726 },
    Airport { code: "MCO", city: "Orlando", state: "FL", lat: 28.4294, lon: -81.309 },
    Airport { code: "MIA", city: "Miami", state: "FL", lat: 25.7932, lon: -80.2906 },
    Airport { code: "MSP", city: "Minneapolis", state: "MN", lat: 44.8801, lon: -93.2217 },
    Airport { code: "ORD", city: "Chicago", state: "IL", lat: 41.9786, lon: -87.9048 },
    Airport { code: "PHL", city: "Philadelphia", state: "PA", lat: 39.8719, lon: -75.2411 },
    Airport { code: "PHX", city: "Phoenix", state: "AZ", lat: 33.4353, lon: -112.0059 },
    Airport { code: "SAN", city: "San Diego", state: "CA", lat: 32.7336, lon: -117.19 },
    Airport { code: "SEA", city: "Seattle", state: "WA", lat: 47.4479, lon: -122.3103 },
    Airport { code: "SFO", city: "San Francisco", state: "CA", lat: 37.6198, lon: -122.3748 },
    Airport { code: "SLC", city: "Salt Lake City", state: "UT", lat: 40.7889, lon: -111.9799 },
    Airport { code: "TPA", city: "Tampa", state: "FL", lat: 27.9755, lon: -82.5332 },
];

/// Airlines known at training time, sorted by code
pub static AIRLINES: [Airline; 8] = [
    Airline { code: "AA", name: "American Airlines" },
    Airline { code: "AS", name: "Alaska Airlines" },
    Airline { code: "B6", name: "JetBlue Airways" },
    Airline { code: "DL", name: "Delta Air Lines" },
    Airline { code: "F9", name: "Frontier Airlines" },
    Airline { code: "NK", name: "Spirit Airlines" },
    Airline { code: "UA", name: "United Airlines" },
    Airline { code: "WN", name: "Southwest Airlines" },
];

/// Encoding tables for categorical features
///
/// Wraps the airport and airline tables so a different trained mapping can
/// be supplied without touching the builder. Cheap to copy; the default is
/// the standard reference data above.
#[derive(Debug, Clone, Copy)]
pub struct Encodings {
    airports: &'static [Airport],
    airlines: &'static [Airline],
}

impl Default for Encodings {
    fn default() -> Self {
        Self::standard()
    }
}

impl Encodings {
    /// The standard reference tables
    pub fn standard() -> Self {
        Self {
            airports: &AIRPORTS,
            airlines: &AIRLINES,
        }
    }

    /// Look up an airport entry by code
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports
            .binary_search_by(|a| a.code.cmp(code))
            .ok()
            .map(|i| &self.airports[i])
    }

    /// Look up an airport with its trained encoding index
    pub fn airport_entry(&self, code: &str) -> Option<(u32, &Airport)> {
        self.airports
            .binary_search_by(|a| a.code.cmp(code))
            .ok()
            .map(|i| (i as u32, &self.airports[i]))
    }

    /// Trained integer encoding for an airport code
    pub fn airport_index(&self, code: &str) -> Option<u32> {
        self.airports
            .binary_search_by(|a| a.code.cmp(code))
            .ok()
            .map(|i| i as u32)
    }

    /// Airport entry at a trained encoding index
    pub fn airport_at(&self, index: u32) -> Option<&Airport> {
        self.airports.get(index as usize)
    }

    /// Trained integer encoding for an airline code
    pub fn airline_index(&self, code: &str) -> Option<u32> {
        self.airlines
            .binary_search_by(|a| a.code.cmp(code))
            .ok()
            .map(|i| i as u32)
    }

    /// Airline entry at a trained encoding index
    pub fn airline_at(&self, index: u32) -> Option<&Airline> {
        self.airlines.get(index as usize)
    }

    /// Airline display name, falling back to the raw code
    pub fn airline_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.airlines
            .binary_search_by(|a| a.code.cmp(code))
            .ok()
            .map(|i| self.airlines[i].name)
            .unwrap_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_table_sorted_by_code() {
        for pair in AIRPORTS.windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "airport table out of order at {}",
                pair[1].code
            );
        }
    }

    #[test]
    fn test_airline_table_sorted_by_code() {
        for pair in AIRLINES.windows(2) {
            assert!(pair[0].code < pair[1].code);
        }
    }

    #[test]
    fn test_airport_encoding_is_lexicographic_rank() {
        let enc = Encodings::standard();
        assert_eq!(enc.airport_index("ATL"), Some(0));
        assert_eq!(enc.airport_index("BOS"), Some(1));
        assert_eq!(enc.airport_index("LAX"), Some(12));
        assert_eq!(enc.airport_index("TPA"), Some(24));
    }

    #[test]
    fn test_airline_encoding_is_lexicographic_rank() {
        let enc = Encodings::standard();
        assert_eq!(enc.airline_index("AA"), Some(0));
        assert_eq!(enc.airline_index("DL"), Some(3));
        assert_eq!(enc.airline_index("WN"), Some(7));
    }

    #[test]
    fn test_unknown_codes_do_not_resolve() {
        let enc = Encodings::standard();
        assert_eq!(enc.airport_index("ZZZ"), None);
        assert_eq!(enc.airline_index("XX"), None);
    }

    #[test]
    fn test_index_roundtrip() {
        let enc = Encodings::standard();
        let idx = enc.airport_index("SEA").unwrap();
        assert_eq!(enc.airport_at(idx).unwrap().code, "SEA");

        let idx = enc.airline_index("B6").unwrap();
        assert_eq!(enc.airline_at(idx).unwrap().code, "B6");
    }

    #[test]
    fn test_airline_name_falls_back_to_code() {
        let enc = Encodings::standard();
        assert_eq!(enc.airline_name("DL"), "Delta Air Lines");
        assert_eq!(enc.airline_name("Q9"), "Q9");
    }
}
