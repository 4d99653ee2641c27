//! Destination dataset: CSV loading, row cleaning and key lookup.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::constants::REQUIRED_COLUMNS;
use crate::{DatasetError, is_placeholder, normalize_destination};

/// One usable row of the dataset. Every field is trimmed and non-placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationRecord {
    pub destination: String,
    pub nearby_places: String,
    pub estimated_cost: String,
    pub recommended_days: String,
    pub place_type: String,
    pub state: String,
    /// Lookup key derived from `destination`.
    pub normalized_dest: String,
}

impl DestinationRecord {
    pub fn new(
        destination: impl Into<String>,
        nearby_places: impl Into<String>,
        estimated_cost: impl Into<String>,
        recommended_days: impl Into<String>,
        place_type: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        let destination = destination.into();
        let normalized_dest = normalize_destination(&destination);
        Self {
            destination,
            nearby_places: nearby_places.into(),
            estimated_cost: estimated_cost.into(),
            recommended_days: recommended_days.into(),
            place_type: place_type.into(),
            state: state.into(),
            normalized_dest,
        }
    }

    /// Builds a record from the six required cells in canonical column order.
    /// Returns `None` when any cell is missing or a placeholder.
    fn from_cells(cells: [Option<&str>; 6]) -> Option<Self> {
        let [destination, nearby, cost, days, place_type, state] =
            cells.map(|c| c.map(str::trim).filter(|v| !is_placeholder(v)));
        Some(Self::new(destination?, nearby?, cost?, days?, place_type?, state?))
    }
}

/// Immutable in-memory table of destinations.
#[derive(Debug, Clone, Default)]
pub struct TravelDataset {
    records: Vec<DestinationRecord>,
    /// normalized key -> index of the first record carrying it
    index: HashMap<String, usize>,
    destinations: Vec<String>,
}

impl TravelDataset {
    /// Loads and cleans the dataset at `path`.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path)
            .map_err(|source| DatasetError::Io { path: path.to_path_buf(), source })?;
        let dataset = Self::read_latin1(file)
            .map_err(|source| DatasetError::Io { path: path.to_path_buf(), source })
            .and_then(|text| Self::parse(&text))?;
        tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            destinations = dataset.destinations.len(),
            "Travel data loaded"
        );
        Ok(dataset)
    }

    /// Parses an ISO-8859-1 encoded CSV stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let text = Self::read_latin1(reader).map_err(|e| DatasetError::Csv(e.into()))?;
        Self::parse(&text)
    }

    /// Builds a dataset from already-clean records, keeping their order.
    pub fn from_records(records: Vec<DestinationRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            index.entry(record.normalized_dest.clone()).or_insert(i);
        }
        let destinations = records
            .iter()
            .map(|r| r.destination.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect();
        Self { records, index, destinations }
    }

    pub fn records(&self) -> &[DestinationRecord] {
        &self.records
    }

    /// Unique display names, sorted by their raw string.
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the first record whose key matches the normalized `raw` input.
    pub fn find(&self, raw: &str) -> Option<&DestinationRecord> {
        let key = normalize_destination(raw);
        self.index.get(&key).and_then(|&i| self.records.get(i))
    }

    // Latin-1 maps every byte to the code point of the same value, so decoding never fails.
    fn read_latin1<R: Read>(mut reader: R) -> std::io::Result<String> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(encoding_rs::mem::decode_latin1(&bytes).into_owned())
    }

    fn parse(text: &str) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let mut columns = [0usize; 6];
        for (slot, name) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_owned()))?;
        }

        let mut records = Vec::new();
        let mut dropped = 0usize;
        for (line, row) in reader.records().enumerate() {
            let row = row?;
            match DestinationRecord::from_cells(columns.map(|c| row.get(c))) {
                Some(record) => records.push(record),
                None => {
                    tracing::debug!(line = line.saturating_add(2), "dropping row with missing fields");
                    dropped = dropped.saturating_add(1);
                },
            }
        }
        if dropped > 0 {
            tracing::info!(dropped, "Dropped rows with missing required fields");
        }
        Ok(Self::from_records(records))
    }
}
