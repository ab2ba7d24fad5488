//! Plain-text summary of the top candidate stations.

use std::fmt::Write;

use crate::model::GapModel;

/// Format the top `limit` candidates as an aligned text table.
pub fn candidate_table(model: &GapModel, limit: usize) -> String {
    if model.candidates.is_empty() {
        return "No candidates found matching the thresholds.\n".to_string();
    }

    let name_width = model
        .candidates
        .iter()
        .take(limit)
        .map(|c| c.name.len())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:>10}  {:>8}  {:<24}  Routes",
        "Name", "Boardings", "Miles", "Nearest rail"
    );
    for candidate in model.candidates.iter().take(limit) {
        let (nearest, miles) = match &candidate.nearest_rail {
            Some(n) => (n.name.as_str(), format!("{:.2}", n.distance_miles)),
            None => ("none", "-".to_string()),
        };
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>10}  {:>8}  {:<24}  {}",
            candidate.name,
            candidate.bus_boardings.round() as i64,
            miles,
            nearest,
            candidate.routes.join(", ")
        );
    }
    out
}
