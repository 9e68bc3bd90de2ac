use crate::infra::{parse_date, InMemoryChecklistRepository};
use chrono::NaiveDate;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use travel_ready::checklist::{
    AgeGroup, ChecklistResponse, ChecklistService, TravelerProfile, TripParameters,
};
use travel_ready::config::AppConfig;
use travel_ready::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// JSON file with the full trip parameters; inline flags are ignored when set
    #[arg(long)]
    pub(crate) trip: Option<PathBuf>,
    /// Origin climate (tropical, cold, desert, temperate)
    #[arg(long, required_unless_present = "trip")]
    pub(crate) origin: Option<String>,
    /// Destination climate (tropical, cold, desert, temperate)
    #[arg(long, required_unless_present = "trip")]
    pub(crate) destination: Option<String>,
    /// Trip length in days
    #[arg(long, required_unless_present = "trip")]
    pub(crate) days: Option<u32>,
    /// Season (spring, summer, fall, winter)
    #[arg(long, required_unless_present = "trip")]
    pub(crate) season: Option<String>,
    /// Travel type (business, leisure, adventure, family, backpacking)
    #[arg(long, required_unless_present = "trip")]
    pub(crate) travel_type: Option<String>,
    /// Travel mode (air, car, train, cruise)
    #[arg(long, required_unless_present = "trip")]
    pub(crate) travel_mode: Option<String>,
    /// Departure date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Number of senior travelers in the party
    #[arg(long, default_value_t = 0)]
    pub(crate) seniors: u8,
    /// Number of child travelers in the party
    #[arg(long, default_value_t = 0)]
    pub(crate) children: u8,
    /// Number of adult travelers with special needs
    #[arg(long, default_value_t = 0)]
    pub(crate) special_needs: u8,
    /// Print the response as JSON instead of a readable listing
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let print_json = args.json;
    let trip = trip_from_args(args)?;

    let service = ChecklistService::new(
        Arc::new(InMemoryChecklistRepository::default()),
        config.checklist,
    );
    let response = service.preview(&trip)?;

    if print_json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        render_checklist(&trip, &response);
    }

    Ok(())
}

/// Inline flags go through the same deserializer as HTTP payloads so both
/// surfaces reject the same inputs.
pub(crate) fn trip_from_args(args: GenerateArgs) -> Result<TripParameters, AppError> {
    if let Some(path) = args.trip {
        let raw = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&raw)?);
    }

    let lower = |value: Option<String>| value.map(|raw| raw.trim().to_ascii_lowercase());
    let mut trip: TripParameters = serde_json::from_value(json!({
        "origin_climate": lower(args.origin),
        "destination_climate": lower(args.destination),
        "duration_days": args.days,
        "season": lower(args.season),
        "travel_type": lower(args.travel_type),
        "travel_mode": lower(args.travel_mode),
        "travel_start": args.start,
    }))?;

    let party = [
        (args.seniors, AgeGroup::Senior, false),
        (args.children, AgeGroup::Child, false),
        (args.special_needs, AgeGroup::Adult, true),
    ];
    for (count, age_group, has_special_needs) in party {
        for _ in 0..count {
            trip.traveler_demographics.push(TravelerProfile {
                age_group,
                has_special_needs,
                ..TravelerProfile::default()
            });
        }
    }

    Ok(trip)
}

fn render_checklist(trip: &TripParameters, response: &ChecklistResponse) {
    println!(
        "Packing checklist: {} day {:?} trip by {:?} to a {} climate ({} items)",
        trip.duration_days,
        response.trip_type,
        response.travel_mode,
        response.climate.label(),
        response.items.len()
    );
    if let Some(start) = trip.travel_start {
        println!("Departure: {}", start.format("%A %d %B %Y"));
    }

    for item in &response.items {
        println!(
            "  [{:<12}] {} ({}, {:.2})",
            item.priority.label(),
            item.name,
            item.category,
            item.score
        );
        for note in &item.rationale {
            println!("      - {note}");
        }
    }
}
