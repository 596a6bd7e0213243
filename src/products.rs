//! Products
//!
//! Catalog products as supplied by the storefront's catalog service. The cart only ever reads
//! them; it copies the title and price into a line item at add time.

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::vehicles::{fitment::Fitment, selection::VehicleSelection};

/// Product identifier, unique within the catalog and within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Current catalog price
    pub price: Money<'static, Currency>,

    /// Optional product image
    pub image_url: Option<String>,

    /// Vehicles this part fits. Empty means the part fits every vehicle.
    pub fitments: Vec<Fitment>,
}

impl Product {
    /// Create a product with no image and universal fit.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money<'static, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image_url: None,
            fitments: Vec::new(),
        }
    }

    /// Set the product image.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Add a vehicle fitment.
    #[must_use]
    pub fn with_fitment(mut self, fitment: Fitment) -> Self {
        self.fitments.push(fitment);
        self
    }

    /// Whether the product fits the selected vehicle.
    pub fn fits(&self, selection: &VehicleSelection) -> bool {
        selection.make().is_none()
            || self.fitments.is_empty()
            || self
                .fitments
                .iter()
                .any(|fitment| fitment.matches(selection))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::INR;

    use super::*;

    #[test]
    fn product_id_displays_inner_value() {
        assert_eq!(ProductId::from("brake-pad-01").to_string(), "brake-pad-01");
    }

    #[test]
    fn universal_products_fit_any_selection() {
        let product = Product::new("wiper", "Wiper Blade", Money::from_minor(34_900, INR));
        let selection = VehicleSelection::for_vehicle("Honda", "City", None, None);

        assert!(product.fits(&selection));
    }

    #[test]
    fn fitted_products_only_fit_matching_vehicles() {
        let product = Product::new("pad", "Brake Pad", Money::from_minor(149_900, INR))
            .with_fitment(Fitment::new("Honda", "City"));

        let city = VehicleSelection::for_vehicle("Honda", "City", None, None);
        let creta = VehicleSelection::for_vehicle("Hyundai", "Creta", None, None);

        assert!(product.fits(&city));
        assert!(!product.fits(&creta));
        assert!(product.fits(&VehicleSelection::default()));
    }
}
