//! Fitment
//!
//! Which vehicles a part fits, and filtering a product list down to a selected vehicle.

use serde::{Deserialize, Serialize};

use crate::{
    products::Product,
    vehicles::{FuelType, selection::VehicleSelection},
};

/// A make/model (optionally year range and fuel types) that a part fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fitment {
    /// Vehicle make
    pub make: String,

    /// Vehicle model
    pub model: String,

    /// First fitting model year, unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_from: Option<i16>,

    /// Last fitting model year, unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_to: Option<i16>,

    /// Fitting fuel types, every fuel type when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fuel_types: Vec<FuelType>,
}

impl Fitment {
    /// A fitment covering every year and fuel type of a model.
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year_from: None,
            year_to: None,
            fuel_types: Vec::new(),
        }
    }

    /// Restrict the fitment to an inclusive range of model years.
    #[must_use]
    pub fn with_years(mut self, from: Option<i16>, to: Option<i16>) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    /// Restrict the fitment to the given fuel types.
    #[must_use]
    pub fn with_fuel_types(mut self, fuel_types: &[FuelType]) -> Self {
        self.fuel_types = fuel_types.to_vec();
        self
    }

    /// Whether the fitment covers the selection. Levels the shopper has not chosen yet match
    /// anything.
    pub fn matches(&self, selection: &VehicleSelection) -> bool {
        let make_matches = selection.make().is_none_or(|make| make == self.make);
        let model_matches = selection.model().is_none_or(|model| model == self.model);

        let year_matches = selection.year().is_none_or(|year| {
            self.year_from.is_none_or(|from| year >= from) && self.year_to.is_none_or(|to| year <= to)
        });

        let fuel_matches = selection.fuel_type().is_none_or(|fuel_type| {
            self.fuel_types.is_empty() || self.fuel_types.contains(&fuel_type)
        });

        make_matches && model_matches && year_matches && fuel_matches
    }
}

/// Products compatible with the selection, in input order.
pub fn filter_compatible<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    selection: &VehicleSelection,
) -> Vec<&'a Product> {
    products
        .into_iter()
        .filter(|product| product.fits(selection))
        .collect()
}
