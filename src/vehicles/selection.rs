//! Vehicle Selection
//!
//! Cascading make -> model -> year -> fuel type selection. Changing an upstream choice resets
//! the downstream choices it invalidates.

use thiserror::Error;

use crate::vehicles::{FuelType, VehicleCatalog};

/// Rejected selections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The make is not in the catalog.
    #[error("Unknown make: {0}")]
    UnknownMake(String),

    /// The model is not offered for the selected make.
    #[error("Unknown model {model} for make {make}")]
    UnknownModel {
        /// Selected make
        make: String,
        /// Requested model
        model: String,
    },

    /// A make must be chosen first.
    #[error("No make selected")]
    NoMake,

    /// A model must be chosen first.
    #[error("No model selected")]
    NoModel,

    /// The year is outside the model's offered years.
    #[error("Year {0} is not offered for this model")]
    YearNotOffered(i16),

    /// The fuel type is not offered for the selected model.
    #[error("Fuel type {0} is not offered for this model")]
    FuelTypeNotOffered(FuelType),
}

/// The shopper's current vehicle choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleSelection {
    make: Option<String>,
    model: Option<String>,
    year: Option<i16>,
    fuel_type: Option<FuelType>,
}

impl VehicleSelection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection directly, without checking it against a catalog.
    pub fn for_vehicle(
        make: impl Into<String>,
        model: impl Into<String>,
        year: Option<i16>,
        fuel_type: Option<FuelType>,
    ) -> Self {
        Self {
            make: Some(make.into()),
            model: Some(model.into()),
            year,
            fuel_type,
        }
    }

    /// Selected make.
    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    /// Selected model.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Selected model year.
    pub fn year(&self) -> Option<i16> {
        self.year
    }

    /// Selected fuel type.
    pub fn fuel_type(&self) -> Option<FuelType> {
        self.fuel_type
    }

    /// Whether every level has been chosen.
    pub fn is_complete(&self) -> bool {
        self.make.is_some() && self.model.is_some() && self.year.is_some() && self.fuel_type.is_some()
    }

    /// Choose a make. A different make clears model, year and fuel type.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownMake`] if the catalog has no such make.
    pub fn select_make(
        &mut self,
        catalog: &VehicleCatalog,
        make: &str,
    ) -> Result<(), SelectionError> {
        if !catalog.contains_make(make) {
            return Err(SelectionError::UnknownMake(make.to_string()));
        }

        if self.make.as_deref() != Some(make) {
            *self = Self {
                make: Some(make.to_string()),
                ..Self::default()
            };
        }

        Ok(())
    }

    /// Choose a model. A different model clears year and fuel type.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::NoMake`]: no make chosen yet.
    /// - [`SelectionError::UnknownModel`]: the make does not offer the model.
    pub fn select_model(
        &mut self,
        catalog: &VehicleCatalog,
        model: &str,
    ) -> Result<(), SelectionError> {
        let make = self.make.as_deref().ok_or(SelectionError::NoMake)?;

        if catalog.model(make, model).is_none() {
            return Err(SelectionError::UnknownModel {
                make: make.to_string(),
                model: model.to_string(),
            });
        }

        if self.model.as_deref() != Some(model) {
            self.model = Some(model.to_string());
            self.year = None;
            self.fuel_type = None;
        }

        Ok(())
    }

    /// Choose a model year. The fuel type is kept only while it is still offered.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::NoMake`] or [`SelectionError::NoModel`]: upstream not chosen.
    /// - [`SelectionError::YearNotOffered`]: the year is outside the model's offered years.
    pub fn select_year(&mut self, catalog: &VehicleCatalog, year: i16) -> Result<(), SelectionError> {
        let (make, model) = self.make_and_model()?;

        if !catalog.list_years(make, model).contains(&year) {
            return Err(SelectionError::YearNotOffered(year));
        }

        let still_offered = self
            .fuel_type
            .is_none_or(|fuel_type| catalog.list_fuel_types(make, model).contains(&fuel_type));

        self.year = Some(year);

        if !still_offered {
            self.fuel_type = None;
        }

        Ok(())
    }

    /// Choose a fuel type.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::NoMake`] or [`SelectionError::NoModel`]: upstream not chosen.
    /// - [`SelectionError::FuelTypeNotOffered`]: the model does not offer the fuel type.
    pub fn select_fuel_type(
        &mut self,
        catalog: &VehicleCatalog,
        fuel_type: FuelType,
    ) -> Result<(), SelectionError> {
        let (make, model) = self.make_and_model()?;

        if !catalog.list_fuel_types(make, model).contains(&fuel_type) {
            return Err(SelectionError::FuelTypeNotOffered(fuel_type));
        }

        self.fuel_type = Some(fuel_type);

        Ok(())
    }

    /// Reset every level.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn make_and_model(&self) -> Result<(&str, &str), SelectionError> {
        let make = self.make.as_deref().ok_or(SelectionError::NoMake)?;
        let model = self.model.as_deref().ok_or(SelectionError::NoModel)?;

        Ok((make, model))
    }
}
