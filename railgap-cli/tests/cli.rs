use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("railgap").unwrap()
}

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("rail.csv"),
        "Svc_Date,Stop_ID,Avg_Boardings\n\
         2023-01-02,A03,8000\n\
         2023-01-03,A03,9000\n\
         2023-01-02,B03,11000\n",
    )
    .unwrap();
    fs::write(
        dir.join("bus.csv"),
        "STOP,LAT,LON,SUM_PASSENGERS_ON,ROUTE_NAME\n\
         DUPONT CIRCLE STATION,38.9097,-77.0434,3000,42\n\
         UNION STATION,38.8977,-77.0063,5000,X2\n\
         GEORGIA AVE & MISSOURI AVE,38.9640,-77.0281,900,70\n",
    )
    .unwrap();
}

fn analyze(dir: &Path) -> Command {
    let mut c = cmd();
    c.arg("analyze")
        .arg("--rail")
        .arg(dir.join("rail.csv"))
        .arg("--bus")
        .arg(dir.join("bus.csv"))
        .arg("--out-dir")
        .arg(dir);
    c
}

#[test]
fn analyze_prints_the_table_and_writes_only_the_map() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    analyze(dir.path())
        .assert()
        .success()
        .stdout(contains("GEORGIA AVE & MISSOURI AVE"));

    assert!(dir.path().join("proposal_map.html").exists());
    assert!(!dir.path().join("candidates.geojson").exists());
}

#[test]
fn analyze_geojson_writes_every_layer() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    analyze(dir.path()).arg("--geojson").assert().success();

    for name in ["rail_stations", "rail_lines", "bus_hotspots", "candidates"] {
        assert!(dir.path().join(format!("{name}.geojson")).exists());
    }
}

#[test]
fn analyze_json_prints_a_feature_collection() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    analyze(dir.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(contains("FeatureCollection"));
}

#[test]
fn stations_lists_known_ids() {
    cmd()
        .arg("stations")
        .assert()
        .success()
        .stdout(contains("Metro Center"));
}
