//! Insertion-ordered model registry.

use std::fmt;

use outbreak_core::traits::IForecastModel;
use rayon::prelude::*;

/// A model and the id it was registered under.
pub struct RegisteredModel {
    pub id: String,
    pub model: Box<dyn IForecastModel>,
}

impl fmt::Debug for RegisteredModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredModel")
            .field("id", &self.id)
            .field("name", &self.model.name())
            .field("fitted", &self.model.is_fitted())
            .finish()
    }
}

/// Registered models in the order they were added.
///
/// Re-registering an id replaces the model in place, keeping its position.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    entries: Vec<RegisteredModel>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `model` under `id`, returning any model it replaced.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        model: Box<dyn IForecastModel>,
    ) -> Option<Box<dyn IForecastModel>> {
        let id = id.into();
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => Some(std::mem::replace(&mut entry.model, model)),
            None => {
                self.entries.push(RegisteredModel { id, model });
                None
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Box<dyn IForecastModel>> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos).model)
    }

    pub fn get(&self, id: &str) -> Option<&dyn IForecastModel> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.model.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredModel> {
        self.entries.iter()
    }

    /// Parallel mutable access, one task per model.
    pub fn par_iter_mut(&mut self) -> impl ParallelIterator<Item = &mut RegisteredModel> {
        self.entries.par_iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
