use std::io;

use clap::{Args, Subcommand};
use spanner::config::SpannerConfig;

#[derive(Debug, Args)]
pub(crate) struct VehiclesCommand {
    #[command(subcommand)]
    command: VehiclesSubcommand,
}

#[derive(Debug, Subcommand)]
enum VehiclesSubcommand {
    /// List every make
    Makes,

    /// List a make's models
    Models {
        /// Vehicle make
        make: String,
    },

    /// List a model's years, newest first
    Years {
        /// Vehicle make
        make: String,

        /// Vehicle model
        model: String,
    },

    /// List a model's fuel types
    Fuels {
        /// Vehicle make
        make: String,

        /// Vehicle model
        model: String,
    },
}

pub(crate) fn run(
    command: VehiclesCommand,
    config: &SpannerConfig,
    out: &mut impl io::Write,
) -> anyhow::Result<()> {
    let catalog = super::load_vehicles(config)?;

    match command.command {
        VehiclesSubcommand::Makes => {
            for make in catalog.list_makes() {
                writeln!(out, "{make}")?;
            }
        }
        VehiclesSubcommand::Models { make } => {
            for model in catalog.list_models(&make) {
                writeln!(out, "{model}")?;
            }
        }
        VehiclesSubcommand::Years { make, model } => {
            for year in catalog.list_years(&make, &model) {
                writeln!(out, "{year}")?;
            }
        }
        VehiclesSubcommand::Fuels { make, model } => {
            for fuel_type in catalog.list_fuel_types(&make, &model) {
                writeln!(out, "{fuel_type}")?;
            }
        }
    }

    Ok(())
}
