//! Shared constants for travel-recs.

/// Dataset file read when no path is configured.
pub const DEFAULT_DATA_PATH: &str = "travel_data2.csv";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default HTTP listen address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Marker used in a recommendation when a numeric value could not be extracted.
pub const NOT_AVAILABLE: &str = "Not available";

/// Currency prefix for the overall cost.
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

/// Column headers every dataset must carry.
pub const COL_DESTINATION: &str = "Destination";
pub const COL_NEARBY_PLACES: &str = "Nearby_Places";
pub const COL_ESTIMATED_COST: &str = "Estimated_Cost_INR";
pub const COL_RECOMMENDED_DAYS: &str = "Recommended_Days";
pub const COL_TYPE: &str = "Type";
pub const COL_STATE: &str = "State";

/// All required columns, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_DESTINATION,
    COL_NEARBY_PLACES,
    COL_ESTIMATED_COST,
    COL_RECOMMENDED_DAYS,
    COL_TYPE,
    COL_STATE,
];
