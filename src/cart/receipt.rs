//! Cart Receipt
//!
//! Plain-text rendering of a cart and its totals.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, pricing::CartTotals};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Failed to write receipt output.
    #[error("failed to write receipt output")]
    IO(#[from] io::Error),
}

/// Write the cart's line items followed by its totals.
///
/// # Errors
///
/// Returns [`ReceiptError::IO`] if writing to `out` fails.
pub fn write_cart(
    mut out: impl io::Write,
    cart: &Cart,
    totals: &CartTotals,
) -> Result<(), ReceiptError> {
    if cart.is_empty() {
        writeln!(out, "\nYour cart is empty.\n")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Unit Price", "Qty", "Line Total"]);

    for (index, item) in cart.items().iter().enumerate() {
        builder.push_record([
            format!("#{}", index + 1),
            item.title().to_string(),
            item.unit_price().to_string(),
            item.quantity().to_string(),
            item.line_total().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "\n{table}")?;

    write_totals(&mut out, totals)
}

/// Write the totals block.
///
/// # Errors
///
/// Returns [`ReceiptError::IO`] if writing to `out` fails.
pub fn write_totals(out: &mut impl io::Write, totals: &CartTotals) -> Result<(), ReceiptError> {
    let mut lines = vec![
        ("Items:", totals.item_count.to_string()),
        ("Subtotal:", totals.subtotal.to_string()),
    ];

    if let Some(code) = &totals.coupon_code {
        lines.push(("Coupon:", format!("{code} -{}", totals.discount)));
    }

    lines.push((
        "Shipping:",
        if totals.shipping.to_minor_units() == 0 {
            "FREE".to_string()
        } else {
            totals.shipping.to_string()
        },
    ));
    lines.push(("Total:", totals.grand_total.to_string()));

    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = lines.iter().map(|(_, value)| value.chars().count()).max().unwrap_or(0);

    for (label, value) in &lines {
        writeln!(out, " {label:<label_width$}  {value:>value_width$}")?;
    }

    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::INR};
    use testresult::TestResult;

    use super::*;
    use crate::{products::Product, shipping::ShippingPolicy};

    #[test]
    fn write_cart_lists_items_and_totals() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.add_item(&Product::new("pad", "Brake Pad", Money::from_minor(149_900, INR)))?;
        cart.add_item(&Product::new("plug", "Spark Plug", Money::from_minor(25_000, INR)))?;

        let totals = cart.totals(&ShippingPolicy::default(), None)?;
        let mut out = Vec::new();

        write_cart(&mut out, &cart, &totals)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Brake Pad"));
        assert!(rendered.contains("Spark Plug"));
        assert!(rendered.contains("Subtotal:"));
        assert!(rendered.contains("Shipping:"));
        assert!(!rendered.contains("Coupon:"));

        Ok(())
    }

    #[test]
    fn write_cart_reports_empty_cart() -> TestResult {
        let cart = Cart::new(INR);
        let totals = cart.totals(&ShippingPolicy::default(), None)?;
        let mut out = Vec::new();

        write_cart(&mut out, &cart, &totals)?;

        assert!(String::from_utf8(out)?.contains("Your cart is empty."));

        Ok(())
    }

    #[test]
    fn write_totals_marks_free_shipping() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.add_item(&Product::new("kit", "Clutch Kit", Money::from_minor(1_200_000, INR)))?;

        let totals = cart.totals(&ShippingPolicy::default(), None)?;
        let mut out = Vec::new();

        write_totals(&mut out, &totals)?;

        assert!(String::from_utf8(out)?.contains("FREE"));

        Ok(())
    }
}
