//! Vehicle Catalog
//!
//! A make -> model -> [`ModelSpec`] table with pure lookup queries. Unknown makes and models are
//! not errors; every query answers with an empty result instead.

use std::collections::BTreeMap;

use serde::Deserialize;
use smallvec::SmallVec;

use crate::vehicles::{FLOOR_YEAR, FuelType, VehicleError, current_year, data};

/// Fuel types and production years for a single model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    fuel_types: SmallVec<[FuelType; 4]>,
    year_start: i16,
    year_end: Option<i16>,
}

impl ModelSpec {
    /// Create a model spec. `year_end` is `None` while the model is still in production.
    pub fn new(fuel_types: &[FuelType], year_start: i16, year_end: Option<i16>) -> Self {
        Self {
            fuel_types: SmallVec::from_slice(fuel_types),
            year_start,
            year_end,
        }
    }

    /// Fuel types in source order.
    pub fn fuel_types(&self) -> &[FuelType] {
        &self.fuel_types
    }

    /// First production year.
    pub fn year_start(&self) -> i16 {
        self.year_start
    }

    /// Last production year, if the model has been discontinued.
    pub fn year_end(&self) -> Option<i16> {
        self.year_end
    }

    /// Offered model years, newest first, as of `current_year`.
    fn years_at(&self, current_year: i16) -> Vec<i16> {
        let end = self.year_end.unwrap_or(current_year).min(current_year);
        let start = self.year_start.max(FLOOR_YEAR);

        if start > end {
            return Vec::new();
        }

        (start..=end).rev().collect()
    }
}

/// Vehicle compatibility catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleCatalog {
    makes: BTreeMap<String, BTreeMap<String, ModelSpec>>,
}

/// Wrapper for vehicles in YAML
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    makes: BTreeMap<String, BTreeMap<String, ModelFixture>>,
}

/// Model Fixture
#[derive(Debug, Deserialize)]
struct ModelFixture {
    fuel_types: Vec<FuelType>,
    year_start: i16,
    #[serde(default)]
    year_end: Option<i16>,
}

impl VehicleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog compiled into the application.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        for row in data::MODELS {
            catalog
                .makes
                .entry(row.make.to_string())
                .or_default()
                .insert(
                    row.model.to_string(),
                    ModelSpec::new(row.fuel_types, row.year_start, row.year_end),
                );
        }

        catalog
    }

    /// Load a catalog from YAML.
    ///
    /// ```yaml
    /// makes:
    ///   Honda:
    ///     City: { fuel_types: [Petrol, Diesel], year_start: 1998 }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a model has an invalid year range or no fuel
    /// types.
    pub fn from_yaml(yaml: &str) -> Result<Self, VehicleError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;
        let mut catalog = Self::new();

        for (make, models) in fixture.makes {
            for (model, spec) in models {
                catalog.insert(
                    &make,
                    &model,
                    ModelSpec::new(&spec.fuel_types, spec.year_start, spec.year_end),
                )?;
            }
        }

        Ok(catalog)
    }

    /// Insert or replace a model.
    ///
    /// # Errors
    ///
    /// - [`VehicleError::InvalidYearRange`]: `year_end` precedes `year_start`.
    /// - [`VehicleError::NoFuelTypes`]: the model lists no fuel types.
    pub fn insert(&mut self, make: &str, model: &str, spec: ModelSpec) -> Result<(), VehicleError> {
        if let Some(end) = spec.year_end.filter(|end| *end < spec.year_start) {
            return Err(VehicleError::InvalidYearRange {
                make: make.to_string(),
                model: model.to_string(),
                start: spec.year_start,
                end,
            });
        }

        if spec.fuel_types.is_empty() {
            return Err(VehicleError::NoFuelTypes {
                make: make.to_string(),
                model: model.to_string(),
            });
        }

        self.makes
            .entry(make.to_string())
            .or_default()
            .insert(model.to_string(), spec);

        Ok(())
    }

    /// Look up a single model.
    pub fn model(&self, make: &str, model: &str) -> Option<&ModelSpec> {
        self.makes.get(make)?.get(model)
    }

    /// Whether the make is known.
    pub fn contains_make(&self, make: &str) -> bool {
        self.makes.contains_key(make)
    }

    /// All makes, sorted.
    pub fn list_makes(&self) -> Vec<&str> {
        self.makes.keys().map(String::as_str).collect()
    }

    /// All models for `make`, sorted. Empty for an unknown make.
    pub fn list_models(&self, make: &str) -> Vec<&str> {
        self.makes
            .get(make)
            .map(|models| models.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Offered model years for `make`/`model`, newest first, as of the current wall-clock year.
    pub fn list_years(&self, make: &str, model: &str) -> Vec<i16> {
        self.list_years_at(make, model, current_year())
    }

    /// Offered model years for `make`/`model`, newest first, as of `current_year`.
    ///
    /// Runs from the earlier of the production end and `current_year` down to the later of the
    /// production start and [`FLOOR_YEAR`]. Empty for an unknown model or an empty range.
    pub fn list_years_at(&self, make: &str, model: &str, current_year: i16) -> Vec<i16> {
        self.model(make, model)
            .map(|spec| spec.years_at(current_year))
            .unwrap_or_default()
    }

    /// Fuel types for `make`/`model` in source order. Empty for an unknown model.
    pub fn list_fuel_types(&self, make: &str, model: &str) -> &[FuelType] {
        self.model(make, model)
            .map_or(&[][..], ModelSpec::fuel_types)
    }
}
