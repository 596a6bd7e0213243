//! Integration tests for cart totals against the bundled `parts` catalog and coupons.
//!
//! Defaults: free shipping from 10,000.00 INR, otherwise a 99.00 INR flat fee.
//!
//! Cart A: 1 x brake pads (1,499.00) + 2 x oil filters (349.00) = 2,197.00
//! - no coupon: 2,197.00 + 99.00 shipping = 2,296.00
//! - WELCOME10 (10%, min 1,000.00): 2,197.00 - 219.70 + 99.00 = 2,076.30
//! - FLAT200 (min 2,500.00): minimum not met, 2,296.00
//!
//! Cart B: 1 x LED headlamp (10,499.00)
//! - no coupon: free shipping, 10,499.00
//! - FLAT200: 10,499.00 - 200.00 = 10,299.00, still free shipping because shipping is decided
//!   on the undiscounted subtotal

use rusty_money::{Money, iso::INR};
use testresult::TestResult;

use spanner::{cart::Cart, fixtures::Fixture, shipping::ShippingPolicy};

fn cart_a(fixture: &Fixture) -> TestResult<Cart> {
    let mut cart = Cart::new(INR);

    cart.add_item(fixture.product("brake-pad-city")?)?;
    cart.add_item(fixture.product("oil-filter-swift")?)?;
    cart.add_item(fixture.product("oil-filter-swift")?)?;

    Ok(cart)
}

#[test]
fn below_threshold_pays_flat_fee() -> TestResult {
    let fixture = Fixture::from_set("parts")?;
    let cart = cart_a(&fixture)?;
    let totals = cart.totals(&ShippingPolicy::default(), None)?;

    assert_eq!(totals.item_count, 3);
    assert_eq!(totals.subtotal, Money::from_minor(219_700, INR));
    assert_eq!(totals.shipping, Money::from_minor(9_900, INR));
    assert_eq!(totals.grand_total, Money::from_minor(229_600, INR));
    assert_eq!(totals.coupon_code, None);

    Ok(())
}

#[test]
fn percentage_coupon_discounts_subtotal() -> TestResult {
    let fixture = Fixture::from_set("parts")?;
    let cart = cart_a(&fixture)?;
    let totals = cart.totals(&ShippingPolicy::default(), Some(fixture.coupon("WELCOME10")?))?;

    assert_eq!(totals.discount, Money::from_minor(21_970, INR));
    assert_eq!(totals.shipping, Money::from_minor(9_900, INR));
    assert_eq!(totals.grand_total, Money::from_minor(207_630, INR));
    assert_eq!(totals.coupon_code.as_deref(), Some("WELCOME10"));

    Ok(())
}

#[test]
fn coupon_below_minimum_subtotal_takes_nothing_off() -> TestResult {
    let fixture = Fixture::from_set("parts")?;
    let cart = cart_a(&fixture)?;
    let totals = cart.totals(&ShippingPolicy::default(), Some(fixture.coupon("FLAT200")?))?;

    assert_eq!(totals.discount, Money::from_minor(0, INR));
    assert_eq!(totals.grand_total, Money::from_minor(229_600, INR));

    Ok(())
}

#[test]
fn discount_does_not_revoke_free_shipping() -> TestResult {
    let fixture = Fixture::from_set("parts")?;
    let mut cart = Cart::new(INR);

    cart.add_item(fixture.product("headlamp-thar")?)?;

    let plain = cart.totals(&ShippingPolicy::default(), None)?;

    assert_eq!(plain.shipping, Money::from_minor(0, INR));
    assert_eq!(plain.grand_total, Money::from_minor(1_049_900, INR));

    let discounted = cart.totals(&ShippingPolicy::default(), Some(fixture.coupon("flat200")?))?;

    assert_eq!(discounted.discount, Money::from_minor(20_000, INR));
    assert_eq!(discounted.shipping, Money::from_minor(0, INR));
    assert_eq!(discounted.grand_total, Money::from_minor(1_029_900, INR));

    Ok(())
}

#[test]
fn totals_match_single_figure_accessors() -> TestResult {
    let fixture = Fixture::from_set("parts")?;
    let cart = cart_a(&fixture)?;
    let policy = ShippingPolicy::default();
    let totals = cart.totals(&policy, None)?;

    assert_eq!(totals.subtotal, cart.subtotal());
    assert_eq!(totals.shipping, cart.shipping_cost(&policy)?);
    assert_eq!(totals.grand_total, cart.grand_total(&policy)?);

    Ok(())
}
