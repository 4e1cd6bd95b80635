use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Directed region-to-region connection weights.
///
/// Serialized as a map of `"region_a:region_b"` to weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct ConnectivityTable {
    edges: BTreeMap<(String, String), f64>,
}

impl ConnectivityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>, weight: f64) {
        self.edges.insert((source.into(), target.into()), weight);
    }

    pub fn with_edge(
        mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
    ) -> Self {
        self.insert(source, target, weight);
        self
    }

    /// Weight of `source -> target`, or `None` when the edge is absent.
    pub fn get(&self, source: &str, target: &str) -> Option<f64> {
        self.edges
            .get(&(source.to_string(), target.to_string()))
            .copied()
    }

    /// Weight of `source -> target`; 0.0 when absent.
    pub fn weight(&self, source: &str, target: &str) -> f64 {
        self.get(source, target).unwrap_or(0.0)
    }

    /// Edges leaving `source` in target order.
    pub fn outgoing<'a>(&'a self, source: &'a str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.edges
            .iter()
            .filter(move |((s, _), _)| s == source)
            .map(|((_, t), w)| (t.as_str(), *w))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.edges
            .iter()
            .map(|((s, t), w)| (s.as_str(), t.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl From<BTreeMap<String, f64>> for ConnectivityTable {
    fn from(raw: BTreeMap<String, f64>) -> Self {
        let edges = raw
            .into_iter()
            .filter_map(|(key, weight)| {
                let (source, target) = key.split_once(':')?;
                Some(((source.to_string(), target.to_string()), weight))
            })
            .collect();
        Self { edges }
    }
}

impl From<ConnectivityTable> for BTreeMap<String, f64> {
    fn from(table: ConnectivityTable) -> Self {
        table
            .edges
            .into_iter()
            .map(|((s, t), w)| (format!("{s}:{t}"), w))
            .collect()
    }
}

/// Current trade volume per connection relative to a baseline.
///
/// `volumes` is keyed like [`ConnectivityTable`], `"source:target"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeVolume {
    #[serde(default = "default_baseline")]
    pub baseline: f64,
    #[serde(default)]
    pub volumes: BTreeMap<String, f64>,
}

fn default_baseline() -> f64 {
    1.0
}

impl Default for TradeVolume {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            volumes: BTreeMap::new(),
        }
    }
}

impl TradeVolume {
    pub fn with_volume(
        mut self,
        source: impl AsRef<str>,
        target: impl AsRef<str>,
        volume: f64,
    ) -> Self {
        self.volumes
            .insert(format!("{}:{}", source.as_ref(), target.as_ref()), volume);
        self
    }

    /// Volume multiplier for the `source -> target` connection; 1.0 when unknown.
    pub fn multiplier(&self, source: &str, target: &str) -> f64 {
        match self.volumes.get(&format!("{source}:{target}")) {
            Some(volume) if self.baseline > 0.0 => volume / self.baseline,
            _ => 1.0,
        }
    }
}
