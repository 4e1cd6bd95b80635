use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Influenza A subtypes seen in poultry surveillance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VirusSubtype {
    H5N1,
    H5N2,
    H5N8,
    H7N3,
    H7N9,
    H9N2,
    Other,
    Unknown,
}

impl VirusSubtype {
    pub const ALL: [VirusSubtype; 8] = [
        Self::H5N1,
        Self::H5N2,
        Self::H5N8,
        Self::H7N3,
        Self::H7N9,
        Self::H9N2,
        Self::Other,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H5N1 => "h5n1",
            Self::H5N2 => "h5n2",
            Self::H5N8 => "h5n8",
            Self::H7N3 => "h7n3",
            Self::H7N9 => "h7n9",
            Self::H9N2 => "h9n2",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VirusSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A confirmed detection. Supplied by the surrounding system and read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub detection_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virus_subtype: Option<VirusSubtype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    /// Raw nucleotide sequence, when the case was sequenced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<String>,
}

impl Case {
    pub fn new(
        id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        detection_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            detection_date,
            virus_subtype: None,
            region_id: None,
            sequence: None,
            sequence_id: None,
        }
    }

    pub fn with_region(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = Some(region_id.into());
        self
    }

    pub fn with_subtype(mut self, subtype: VirusSubtype) -> Self {
        self.virus_subtype = Some(subtype);
        self
    }

    pub fn with_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// The sequence, if present and non-empty.
    pub fn sequence(&self) -> Option<&str> {
        self.sequence.as_deref().filter(|s| !s.is_empty())
    }

    /// Subtype with missing values reported as `Unknown`.
    pub fn subtype_or_unknown(&self) -> VirusSubtype {
        self.virus_subtype.unwrap_or(VirusSubtype::Unknown)
    }
}
