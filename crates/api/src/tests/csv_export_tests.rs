// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dispo::{StatsReport, compute_stats_report};
use dispo_domain::Incident;

use crate::export_report_csv;

use super::helpers::{create_incident, create_week_config, march};

fn create_report(incidents: &[Incident]) -> StatsReport {
    let mut config = create_week_config();
    config.period_count = 2;
    compute_stats_report(incidents, &config, march(20, 0))
}

#[test]
fn test_export_columns_follow_groups() {
    let mut power_cut = create_incident("INC-2", march(12, 9), march(12, 10));
    power_cut.target_category_name = Some(String::from("power"));
    power_cut.target_element_name = None;

    let report: StatsReport = create_report(&[
        create_incident("INC-1", march(4, 9), march(4, 11)),
        power_cut,
    ]);
    let csv: String = export_report_csv(&report).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(String::from)
        .collect();
    assert_eq!(
        headers,
        vec![
            "period",
            "start",
            "end",
            "green_pct",
            "blue_pct",
            "red_pct",
            "network - router",
            "power - unknown",
            "total",
        ]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "S10");
    assert_eq!(&rows[0][1], "2024-03-04T00:00:00Z");
    assert_eq!(&rows[0][2], "2024-03-11T00:00:00Z");
    assert_eq!(&rows[0][3], "96.00");
    assert_eq!(&rows[0][5], "4.00");
    assert_eq!(&rows[0][6], "2.00");
    assert_eq!(&rows[0][7], "0.00");
    assert_eq!(&rows[0][8], "2.00");
    assert_eq!(&rows[1][0], "S11");
    assert_eq!(&rows[1][7], "1.00");
    assert_eq!(&rows[1][8], "1.00");
}

#[test]
fn test_export_without_incidents_has_fixed_columns_only() {
    let report: StatsReport = create_report(&[]);
    let csv: String = export_report_csv(&report).unwrap();
    let first_line: &str = csv.lines().next().unwrap();
    assert_eq!(
        first_line,
        "period,start,end,green_pct,blue_pct,red_pct,total"
    );
    assert_eq!(csv.lines().count(), 3);
}
