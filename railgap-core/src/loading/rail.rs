//! Loading and aggregation of rail ridership summary files.
//!
//! Each file covers one calendar year. Rows are summed into daily totals
//! per stop, the daily totals are averaged into a typical day for that
//! year, and the per-year figures are averaged again across files.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use hashbrown::HashMap;
use log::{info, warn};

use super::columns::{parse_number, parse_service_date, resolve_column};
use crate::model::{RailRide, StationUsage, station_name};
use crate::{Boardings, Error};

const DATE_COLUMNS: &[&str] = &["svc_date", "svcdate", "date", "service_date", "day"];
const STOP_COLUMNS: &[&str] = &["stop_id", "stopid", "station_id", "stationid", "stop"];
const BOARDING_COLUMNS: &[&str] = &[
    "avg_boardings",
    "avg_boarding",
    "avg_daily_boardings",
    "boardings",
    "daily_boardings",
    "avg_daily",
];

/// Load all rail files and reduce them to multi-year station averages.
///
/// Files whose required columns cannot be resolved are skipped with a
/// warning; stop IDs without a known station name are dropped.
///
/// # Errors
///
/// Returns an error if a file cannot be opened or read, or if no file
/// yields usable data.
pub fn load_rail_usage(paths: &[PathBuf]) -> Result<Vec<StationUsage>, Error> {
    // Year averages per stop ID, one entry per file that mentioned the stop
    let mut year_averages: HashMap<String, Vec<Boardings>> = HashMap::new();
    let mut usable_files = 0usize;

    for path in paths {
        let file = File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open file '{}': {}", path.display(), e),
            )
        })?;

        let label = path.display().to_string();
        let Some(rides) = read_rail_rides(file, &label)? else {
            continue;
        };

        let station_avg = station_year_averages(&rides);
        info!("{label}: {} stations (year summary)", station_avg.len());
        usable_files += 1;

        for (stop_id, avg) in station_avg {
            year_averages.entry(stop_id).or_default().push(avg);
        }
    }

    if usable_files == 0 || year_averages.is_empty() {
        return Err(Error::NoRailData);
    }

    let total_stops = year_averages.len();
    let mut usage: Vec<StationUsage> = year_averages
        .into_iter()
        .filter_map(|(stop_id, years)| {
            let name = station_name(&stop_id)?;
            let avg_boardings = years.iter().sum::<Boardings>() / years.len() as Boardings;
            Some(StationUsage {
                stop_id,
                name: name.to_string(),
                avg_boardings,
            })
        })
        .collect();

    if usage.len() < total_stops {
        warn!(
            "Dropped {} stop IDs without a known station name",
            total_stops - usage.len()
        );
    }
    info!("Combined rail dataset: {} stations (multi-year average)", usage.len());

    usage.sort_by(|a, b| a.stop_id.cmp(&b.stop_id));
    Ok(usage)
}

/// Read one rail file into rows.
///
/// Returns `None` when the stop or boardings column cannot be resolved.
/// Rows with an empty stop ID or an unparsable boardings figure are
/// dropped, matching the source data's habit of mixing footers and
/// placeholders into the export.
fn read_rail_rides<R: Read>(reader: R, label: &str) -> Result<Option<Vec<RailRide>>, Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    let date_col = resolve_column(&headers, DATE_COLUMNS);
    let stop_col = resolve_column(&headers, STOP_COLUMNS);
    let board_col = resolve_column(&headers, BOARDING_COLUMNS);

    let (Some(stop_col), Some(board_col)) = (stop_col, board_col) else {
        warn!("{label}: missing stop or boardings column - skipping file");
        return Ok(None);
    };
    if date_col.is_none() {
        warn!("{label}: no date column found - treating all rows as one service day");
    }

    let mut rides = Vec::new();
    for record in rdr.records() {
        let record = record?;

        let stop_id = record.get(stop_col).unwrap_or_default().trim();
        if stop_id.is_empty() {
            continue;
        }
        let Some(boardings) = record.get(board_col).and_then(parse_number) else {
            continue;
        };
        let service_date = date_col
            .and_then(|idx| record.get(idx))
            .and_then(parse_service_date);

        rides.push(RailRide {
            service_date,
            stop_id: stop_id.to_string(),
            boardings,
        });
    }

    Ok(Some(rides))
}

/// Reduce one year's rows to a typical-day average per stop:
/// sum boardings per (service day, stop), then average the daily totals.
fn station_year_averages(rides: &[RailRide]) -> HashMap<String, Boardings> {
    let mut daily: HashMap<(Option<NaiveDate>, &str), Boardings> = HashMap::new();
    for ride in rides {
        *daily
            .entry((ride.service_date, ride.stop_id.as_str()))
            .or_default() += ride.boardings;
    }

    let mut totals: HashMap<&str, (Boardings, usize)> = HashMap::new();
    for ((_, stop_id), total) in daily {
        let entry = totals.entry(stop_id).or_default();
        entry.0 += total;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(stop_id, (sum, days))| (stop_id.to_string(), sum / days as Boardings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rides_from(csv: &str) -> Vec<RailRide> {
        read_rail_rides(csv.as_bytes(), "test").unwrap().unwrap()
    }

    #[test]
    fn daily_totals_are_summed_then_averaged() {
        let rides = rides_from(
            "Svc_Date,Stop_ID,Avg_Boardings\n\
             2024-01-01,A01,100\n\
             2024-01-01,A01,50\n\
             2024-01-02,A01,250\n",
        );
        let avg = station_year_averages(&rides);
        // day 1: 150, day 2: 250 -> typical day 200
        assert_eq!(avg["A01"], 200.0);
    }

    #[test]
    fn rows_without_boardings_or_stop_are_dropped() {
        let rides = rides_from(
            "date,stop,boardings\n\
             2024-01-01,A01,\"1,500\"\n\
             2024-01-01,,300\n\
             2024-01-01,A02,n/a\n",
        );
        assert_eq!(rides.len(), 1);
        assert_eq!(rides[0].boardings, 1500.0);
    }

    #[test]
    fn file_without_required_columns_is_skipped() {
        let result = read_rail_rides("foo,bar\n1,2\n".as_bytes(), "test").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn missing_date_column_groups_all_rows_together() {
        let rides = rides_from("stop_id,boardings\nA01,100\nA01,300\n");
        let avg = station_year_averages(&rides);
        // one synthetic day holding the sum
        assert_eq!(avg["A01"], 400.0);
    }
}
