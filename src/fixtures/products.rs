//! Product Fixtures

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    money::parse_price,
    products::{Product, ProductId},
    vehicles::fitment::Fitment,
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product id -> product fixture
    pub products: BTreeMap<String, ProductFixture>,
}

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Display title
    pub title: String,

    /// Price string (e.g., "1499.00 INR")
    pub price: String,

    /// Image URL
    #[serde(default, alias = "image_url")]
    pub image: Option<String>,

    /// Vehicles the part fits; universal when empty
    #[serde(default)]
    pub fitments: Vec<Fitment>,
}

impl ProductFixture {
    /// Convert to a [`Product`] with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the price cannot be parsed.
    pub fn into_product(self, id: impl Into<ProductId>) -> Result<Product, FixtureError> {
        Ok(Product {
            id: id.into(),
            title: self.title,
            price: parse_price(&self.price)?,
            image_url: self.image,
            fitments: self.fitments,
        })
    }
}
