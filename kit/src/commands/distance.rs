//! `kit distance`

use crate::cli::DistanceUnit;
use crate::error::CliResult;
use kit_convert::{km_to_miles, miles_to_km};
use kit_core::kit_println;
use kit_messages::{msg, MESSAGES};

pub fn handle_distance(value: f64, to: DistanceUnit) -> CliResult<()> {
    let (template, converted) = match to {
        DistanceUnit::Km => (MESSAGES.convert.distance_to_km, miles_to_km(value)),
        DistanceUnit::Miles => (MESSAGES.convert.distance_to_miles, km_to_miles(value)),
    };
    kit_println!(
        "{}",
        msg!(
            template,
            value = format!("{value:.2}"),
            result = format!("{converted:.2}")
        )
    );
    Ok(())
}
