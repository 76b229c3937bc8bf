//! `amapr resolve <uri>` – show the destination a URI names.

use amapr_core::{extract_coordinates, resolve};
use anyhow::Result;

pub fn run_resolve(uri: &str, json: bool) -> Result<()> {
    let dest = resolve(uri);

    if json {
        println!("{}", serde_json::to_string_pretty(&dest)?);
        return Ok(());
    }

    match dest {
        Some(dest) => {
            println!("kind:        {}", dest.kind());
            if let Some(name) = dest.name() {
                println!("name:        {name}");
            }
            if let Some(coords) = dest.coordinates() {
                println!("coordinates: {coords}");
            }
        }
        None => match extract_coordinates(uri) {
            Some(coords) => println!("No destination (coordinates {coords} need reverse geocoding)."),
            None => println!("No destination."),
        },
    }
    Ok(())
}
