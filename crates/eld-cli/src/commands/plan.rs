//! Plan a trip: fetch the route, schedule the days, render the logs.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use serde::Serialize;

use eld_core::distribute;
use eld_planner::{DayPlan, HosLimits, plan_schedule};
use eld_route::RouteSummary;

use crate::Config;
use crate::render::{render_aggregates, render_grid};

/// Full trip result, in the shape the web client consumed.
#[derive(Debug, Serialize)]
pub struct TripResult {
    pub route: RouteSummary,
    pub logs: Vec<DayPlan>,
}

pub async fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    pickup: &str,
    dropoff: &str,
    cycle_used: f64,
    start_date: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let api_key = config
        .api_key
        .as_deref()
        .context("no API key configured; set ELD_API_KEY or add api_key to config.toml")?;
    let client = eld_route::Client::new(&config.route_base_url, api_key)?;

    let route = client
        .trip_information(pickup, dropoff)
        .await
        .context("failed to fetch route")?;
    tracing::debug!(
        distance_miles = route.distance_miles,
        duration_hours = route.duration_hours,
        "fetched route"
    );

    let logs = plan_schedule(route.duration_hours, cycle_used, &HosLimits::default());
    let result = TripResult { route, logs };

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        write_route(writer, &result.route)?;
        write_schedule(writer, &result.logs, start_date)?;
    }
    Ok(())
}

fn write_route<W: Write>(writer: &mut W, route: &RouteSummary) -> Result<()> {
    writeln!(writer, "Route: {} -> {}", route.pickup, route.dropoff)?;
    writeln!(writer, "  distance: {:.1} miles", route.distance_miles)?;
    writeln!(writer, "  driving time: {} hours", route.duration_hours)?;
    Ok(())
}

fn write_schedule<W: Write>(
    writer: &mut W,
    plans: &[DayPlan],
    start_date: Option<NaiveDate>,
) -> Result<()> {
    if plans.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "No driving required.")?;
        return Ok(());
    }
    for plan in plans {
        writeln!(writer)?;
        writeln!(writer, "{}", heading(plan, start_date))?;
        if plan.cycle_reset {
            writeln!(writer, "  off duty {}h to restart the cycle", plan.record.rest)?;
            continue;
        }

        let mut summary = format!("  {}", render_aggregates(&plan.record));
        let _ = write!(
            summary,
            ", cycle {} -> {}",
            plan.record.start_cycle_hour, plan.record.end_cycle_hour
        );
        if plan.breaks > 0 {
            let _ = write!(summary, ", {} DOT break(s)", plan.breaks);
        }
        writeln!(writer, "{summary}")?;
        writeln!(writer, "{}", render_grid(&distribute(&plan.record)))?;
    }
    Ok(())
}

fn heading(plan: &DayPlan, start_date: Option<NaiveDate>) -> String {
    let mut heading = format!("Day {}", plan.record.day);
    if let Some(date) = start_date {
        let offset = Days::new(u64::from(plan.record.day.saturating_sub(1)));
        if let Some(dated) = date.checked_add_days(offset) {
            let _ = write!(heading, " ({dated})");
        }
    }
    if plan.cycle_reset {
        heading.push_str(" - cycle reset");
    }
    heading
}
