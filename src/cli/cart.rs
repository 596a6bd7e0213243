use std::io;

use clap::{Args, Subcommand};
use spanner::{
    cart::{AddOutcome, receipt::write_cart, store::CartStore},
    config::SpannerConfig,
};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add one unit of a catalog product
    Add {
        /// Catalog product id
        #[arg(long)]
        product: String,
    },

    /// Set a line item's quantity; below one removes it
    Update {
        /// Product id
        id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove a line item
    Remove {
        /// Product id
        id: String,
    },

    /// Empty the cart
    Clear,

    /// Show the cart and its totals
    Show {
        /// Coupon code to apply
        #[arg(long)]
        coupon: Option<String>,
    },

    /// Empty the cart after the order service has confirmed payment
    Checkout,
}

pub(crate) fn run(
    command: CartCommand,
    config: &SpannerConfig,
    out: &mut impl io::Write,
) -> anyhow::Result<()> {
    let currency = config.pricing.currency()?;
    let policy = config.pricing.shipping_policy()?;
    let mut store = CartStore::open(config.store.file_store(), &config.store.cart_key, currency);

    match command.command {
        CartSubcommand::Add { product } => {
            let fixture = super::load_products(config)?;
            let product = fixture.product(&product)?;
            let receipt = store.add_item(product)?;

            match receipt.outcome {
                AddOutcome::Inserted => writeln!(out, "Added {} to the cart", product.title)?,
                AddOutcome::Incremented { quantity } => {
                    writeln!(out, "{} quantity is now {quantity}", product.title)?;
                }
            }

            if receipt.reveal_cart {
                write_cart(&mut *out, store.cart(), &store.cart().totals(&policy, None)?)?;
            }
        }
        CartSubcommand::Update { id, quantity } => {
            store.update_quantity(&id.as_str().into(), quantity);
            write_cart(&mut *out, store.cart(), &store.cart().totals(&policy, None)?)?;
        }
        CartSubcommand::Remove { id } => {
            if store.remove_item(&id.as_str().into()) {
                writeln!(out, "Removed {id} from the cart")?;
            } else {
                writeln!(out, "{id} is not in the cart")?;
            }
        }
        CartSubcommand::Clear => {
            store.clear();
            writeln!(out, "Cart cleared")?;
        }
        CartSubcommand::Show { coupon } => {
            let fixture = match &coupon {
                Some(_) => Some(super::load_coupons(config)?),
                None => None,
            };

            let coupon = match (&fixture, coupon.as_deref()) {
                (Some(fixture), Some(code)) => Some(fixture.coupon(code)?),
                _ => None,
            };

            let totals = store.cart().totals(&policy, coupon)?;

            write_cart(&mut *out, store.cart(), &totals)?;
        }
        CartSubcommand::Checkout => {
            store.complete_checkout();
            writeln!(out, "Order placed, cart cleared")?;
        }
    }

    Ok(())
}
