use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::FoodReference;

/// Read-only food catalog with lookups by id and by name.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodReference>,
    by_id: HashMap<String, usize>,
    /// Lowercase name -> index.
    by_name: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog from a list of foods.
    ///
    /// A later entry replaces every earlier one sharing its id or its name,
    /// taking the position of the first.
    pub fn new(foods: Vec<FoodReference>) -> Self {
        let mut kept: Vec<FoodReference> = Vec::with_capacity(foods.len());
        for food in foods {
            let key = food.key();
            let clashes = |f: &FoodReference| f.id == food.id || f.key() == key;
            match kept.iter().position(clashes) {
                Some(idx) => {
                    let mut i = 0;
                    kept.retain(|f| {
                        i += 1;
                        i - 1 <= idx || !clashes(f)
                    });
                    kept[idx] = food;
                }
                None => kept.push(food),
            }
        }

        let by_id = kept
            .iter()
            .enumerate()
            .map(|(idx, f)| (f.id.clone(), idx))
            .collect();
        let by_name = kept
            .iter()
            .enumerate()
            .map(|(idx, f)| (f.key(), idx))
            .collect();
        Self {
            foods: kept,
            by_id,
            by_name,
        }
    }

    pub fn get(&self, id: &str) -> Option<&FoodReference> {
        self.by_id.get(id).map(|&idx| &self.foods[idx])
    }

    /// Get a food by display name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&FoodReference> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&idx| &self.foods[idx])
    }

    pub fn require(&self, id: &str) -> Result<&FoodReference> {
        self.get(id)
            .ok_or_else(|| PlanError::FoodNotFound(id.to_string()))
    }

    /// Display name for an id, falling back to the id itself.
    pub fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|f| f.name.as_str()).unwrap_or(id)
    }

    /// All foods in catalog order.
    pub fn all(&self) -> &[FoodReference] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Ordered preference lists of cheaper alternatives, keyed by exact food name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstitutionGraph {
    edges: BTreeMap<String, Vec<String>>,
}

impl SubstitutionGraph {
    pub fn new(edges: BTreeMap<String, Vec<String>>) -> Self {
        Self { edges }
    }

    pub fn candidates(&self, name: &str) -> &[String] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn insert(&mut self, from: &str, to: Vec<String>) {
        self.edges.insert(from.to_string(), to);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// On-disk shape of the reference data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceFile {
    pub foods: Vec<FoodReference>,
    #[serde(default)]
    pub substitutions: SubstitutionGraph,
}

/// Catalog plus substitution graph, passed explicitly into the pipeline.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub catalog: FoodCatalog,
    pub substitutions: SubstitutionGraph,
}

impl ReferenceData {
    pub fn new(catalog: FoodCatalog, substitutions: SubstitutionGraph) -> Self {
        Self {
            catalog,
            substitutions,
        }
    }

    /// Build from a parsed file, dropping invalid food entries.
    pub fn from_file(file: ReferenceFile) -> Self {
        let total = file.foods.len();
        let foods: Vec<FoodReference> = file.foods.into_iter().filter(|f| f.is_valid()).collect();
        if foods.len() < total {
            tracing::warn!(dropped = total - foods.len(), "ignoring invalid catalog entries");
        }
        Self::new(FoodCatalog::new(foods), file.substitutions)
    }

    pub fn to_file(&self) -> ReferenceFile {
        ReferenceFile {
            foods: self.catalog.all().to_vec(),
            substitutions: self.substitutions.clone(),
        }
    }
}
