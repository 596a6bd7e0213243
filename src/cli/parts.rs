use std::io;

use clap::Args;
use spanner::{
    config::SpannerConfig,
    vehicles::{FuelType, fitment::filter_compatible, selection::VehicleSelection},
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

#[derive(Debug, Args)]
pub(crate) struct PartsArgs {
    /// Vehicle make
    #[arg(long)]
    make: Option<String>,

    /// Vehicle model
    #[arg(long, requires = "make")]
    model: Option<String>,

    /// Model year
    #[arg(long, requires = "model")]
    year: Option<i16>,

    /// Fuel type (petrol, diesel, cng, electric, hybrid, lpg)
    #[arg(long, requires = "model")]
    fuel: Option<FuelType>,
}

pub(crate) fn run(
    args: PartsArgs,
    config: &SpannerConfig,
    out: &mut impl io::Write,
) -> anyhow::Result<()> {
    let PartsArgs {
        make,
        model,
        year,
        fuel,
    } = args;

    let catalog = super::load_vehicles(config)?;
    let fixture = super::load_products(config)?;
    let mut selection = VehicleSelection::new();

    if let Some(make) = make {
        selection.select_make(&catalog, &make)?;
    }

    if let Some(model) = model {
        selection.select_model(&catalog, &model)?;
    }

    if let Some(year) = year {
        selection.select_year(&catalog, year)?;
    }

    if let Some(fuel_type) = fuel {
        selection.select_fuel_type(&catalog, fuel_type)?;
    }

    let parts = filter_compatible(fixture.products(), &selection);

    if parts.is_empty() {
        writeln!(out, "No compatible parts found")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Id", "Part", "Price"]);

    for part in parts {
        builder.push_record([
            part.id.to_string(),
            part.title.clone(),
            part.price.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}
