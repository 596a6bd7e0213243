//! Built-in vehicle table.

use crate::vehicles::FuelType::{self, Cng, Diesel, Electric, Hybrid, Lpg, Petrol};

/// A single make/model row of the built-in table.
#[derive(Debug)]
pub struct ModelRow {
    /// Vehicle make
    pub make: &'static str,
    /// Vehicle model
    pub model: &'static str,
    /// Fuel types the model shipped with
    pub fuel_types: &'static [FuelType],
    /// First production year
    pub year_start: i16,
    /// Last production year, `None` while still in production
    pub year_end: Option<i16>,
}

const fn row(
    make: &'static str,
    model: &'static str,
    fuel_types: &'static [FuelType],
    year_start: i16,
    year_end: Option<i16>,
) -> ModelRow {
    ModelRow {
        make,
        model,
        fuel_types,
        year_start,
        year_end,
    }
}

/// Models known to the storefront.
pub const MODELS: &[ModelRow] = &[
    row("Honda", "Amaze", &[Petrol, Diesel], 2013, None),
    row("Honda", "City", &[Petrol, Diesel, Hybrid], 1998, None),
    row("Honda", "Elevate", &[Petrol], 2023, None),
    row("Honda", "Jazz", &[Petrol, Diesel], 2009, Some(2023)),
    row("Honda", "WR-V", &[Petrol, Diesel], 2017, Some(2023)),
    row("Hyundai", "Creta", &[Petrol, Diesel, Electric], 2015, None),
    row("Hyundai", "i10", &[Petrol, Lpg], 2007, Some(2017)),
    row("Hyundai", "i20", &[Petrol, Diesel], 2008, None),
    row("Hyundai", "Santro", &[Petrol, Cng], 2018, Some(2022)),
    row("Hyundai", "Venue", &[Petrol, Diesel], 2019, None),
    row("Hyundai", "Verna", &[Petrol, Diesel], 2006, None),
    row("Kia", "Carens", &[Petrol, Diesel], 2022, None),
    row("Kia", "Seltos", &[Petrol, Diesel], 2019, None),
    row("Kia", "Sonet", &[Petrol, Diesel], 2020, None),
    row("Mahindra", "Bolero", &[Diesel], 2000, None),
    row("Mahindra", "Scorpio", &[Diesel, Petrol], 2002, None),
    row("Mahindra", "Thar", &[Petrol, Diesel, Electric], 2010, None),
    row("Mahindra", "XUV700", &[Petrol, Diesel], 2021, None),
    row("Maruti Suzuki", "Alto", &[Petrol, Cng], 2000, None),
    row("Maruti Suzuki", "Baleno", &[Petrol, Cng], 2015, None),
    row("Maruti Suzuki", "Brezza", &[Petrol, Cng, Diesel], 2016, None),
    row("Maruti Suzuki", "Dzire", &[Petrol, Diesel, Cng], 2008, None),
    row("Maruti Suzuki", "Ertiga", &[Petrol, Diesel, Cng], 2012, None),
    row("Maruti Suzuki", "Swift", &[Petrol, Diesel, Cng], 2005, None),
    row("Maruti Suzuki", "Wagon R", &[Petrol, Cng, Lpg], 1999, None),
    row("Maruti Suzuki", "Zen", &[Petrol], 1993, Some(2006)),
    row("MG", "Hector", &[Petrol, Diesel, Hybrid], 2019, None),
    row("MG", "ZS EV", &[Electric], 2020, None),
    row("Tata", "Harrier", &[Diesel, Electric], 2019, None),
    row("Tata", "Nexon", &[Petrol, Diesel, Electric, Cng], 2017, None),
    row("Tata", "Tiago", &[Petrol, Cng, Electric], 2016, None),
    row("Tata", "Indica", &[Petrol, Diesel, Lpg], 1998, Some(2018)),
    row("Toyota", "Fortuner", &[Petrol, Diesel], 2009, None),
    row("Toyota", "Innova", &[Petrol, Diesel], 2005, Some(2016)),
    row("Toyota", "Innova Crysta", &[Petrol, Diesel], 2016, None),
    row("Toyota", "Urban Cruiser Hyryder", &[Petrol, Hybrid, Cng], 2022, None),
];
