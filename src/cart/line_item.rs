//! Line Items

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

use crate::products::{Product, ProductId};

/// One product entry in the cart.
///
/// Title and unit price are captured when the product is first added and are not refreshed
/// from the catalog afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    id: ProductId,
    title: String,
    unit_price: Money<'static, Currency>,
    image_url: Option<String>,
    quantity: NonZeroU32,
}

impl CartLineItem {
    /// Create a line item.
    pub fn new(
        id: ProductId,
        title: String,
        unit_price: Money<'static, Currency>,
        image_url: Option<String>,
        quantity: NonZeroU32,
    ) -> Self {
        Self {
            id,
            title,
            unit_price,
            image_url,
            quantity,
        }
    }

    /// Create a line item with a quantity of one from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        Self::new(
            product.id.clone(),
            product.title.clone(),
            product.price,
            product.image_url.clone(),
            NonZeroU32::MIN,
        )
    }

    /// Product identifier
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Title captured at add time
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Unit price captured at add time
    pub fn unit_price(&self) -> &Money<'static, Currency> {
        &self.unit_price
    }

    /// Product image
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Quantity, always at least one
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price multiplied by quantity, in minor units. Saturates instead of overflowing.
    pub fn line_total_minor(&self) -> i64 {
        self.unit_price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity.get()))
    }

    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> Money<'static, Currency> {
        Money::from_minor(self.line_total_minor(), self.unit_price.currency())
    }

    pub(crate) fn increment(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_add(1);
        self.quantity.get()
    }

    pub(crate) fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }

    pub(crate) fn merge_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::INR;

    use super::*;

    #[test]
    fn from_product_starts_at_quantity_one() {
        let product = Product::new("p1", "Spark Plug", Money::from_minor(25_000, INR))
            .with_image_url("https://cdn.example.com/p1.png");

        let item = CartLineItem::from_product(&product);

        assert_eq!(item.id().as_str(), "p1");
        assert_eq!(item.title(), "Spark Plug");
        assert_eq!(item.unit_price(), &Money::from_minor(25_000, INR));
        assert_eq!(item.image_url(), Some("https://cdn.example.com/p1.png"));
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn line_total_multiplies_quantity() {
        let product = Product::new("p1", "Spark Plug", Money::from_minor(25_000, INR));
        let mut item = CartLineItem::from_product(&product);

        item.increment();
        item.increment();

        assert_eq!(item.line_total(), Money::from_minor(75_000, INR));
    }

    #[test]
    fn increment_saturates_at_max() {
        let product = Product::new("p1", "Spark Plug", Money::from_minor(25_000, INR));
        let mut item = CartLineItem::from_product(&product);

        item.set_quantity(NonZeroU32::MAX);

        assert_eq!(item.increment(), u32::MAX);
    }
}
