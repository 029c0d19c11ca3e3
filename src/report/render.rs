//! Plain-text rendering of a report.

use std::fmt::Write;

use super::Report;
use crate::distance::Metric;

fn unit(metric: Option<Metric>) -> &'static str {
    match metric {
        Some(Metric::Block) => "m",
        Some(Metric::GreatCircle) => "km",
        None => "",
    }
}

/// Renders every route with its running loads, then the fleet total.
///
/// ```text
/// Route for vehicle 0:
///  0 Load(0) ->  1 Load(5) ->  2 Load(10) ->  0 Load(10)
/// Distance of the route: 4m
/// Load of the route: 10
///
/// Total Distance of all routes: 4m
/// ```
pub fn render_text(report: &Report) -> String {
    let unit = unit(report.metric());
    let mut out = String::new();

    for route in report.routes() {
        let _ = writeln!(out, "Route for vehicle {}:", route.vehicle_id());
        let stops: Vec<String> = route
            .visits()
            .iter()
            .map(|v| format!(" {} Load({})", v.location, v.load))
            .collect();
        let _ = writeln!(out, "{}", stops.join(" -> "));
        let _ = writeln!(out, "Distance of the route: {}{}", route.total_distance(), unit);
        let _ = writeln!(out, "Load of the route: {}", route.total_load());
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "Total Distance of all routes: {}{}",
        report.total_distance(),
        unit
    );
    out
}
