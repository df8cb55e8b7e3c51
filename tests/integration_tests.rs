use bikeshare_dash::analytics::report::build_report;
use bikeshare_dash::analytics::types::RiderType;
use bikeshare_dash::parser::parse_records;
use bikeshare_dash::records::{RideDataset, Season, Weekday};
use chrono::NaiveDate;

#[test]
fn test_full_pipeline() {
    let bytes = include_bytes!("fixtures/sample_rides.csv");
    let records = parse_records(bytes).expect("Failed to parse ride data");
    let dataset = RideDataset::from_records(records);
    assert_eq!(dataset.len(), 12);

    let (start, end) = dataset.date_span().expect("dataset has records");
    let report = build_report(&dataset, start, end);

    assert_eq!(report.filtered_records, 12);
    assert_eq!(report.totals.total_rides, 239);
    assert_eq!(report.totals.casual_rides, 69);
    assert_eq!(report.totals.registered_rides, 170);

    // Months come out chronologically, gaps omitted (no Feb/Mar rows)
    let months: Vec<&str> = report.monthly.iter().map(|m| m.yearmonth.as_str()).collect();
    assert_eq!(months, vec!["Jan-11", "Apr-11"]);
    assert_eq!(report.monthly[0].total_rides, 93);
    assert_eq!(report.monthly[1].total_rides, 146);

    // Long-form season table: casual row before registered row per season
    assert_eq!(report.seasonly.len(), 4);
    assert_eq!(report.seasonly[0].season, Season::Spring);
    assert_eq!(report.seasonly[0].type_of_rides, RiderType::Casual);
    assert_eq!(report.seasonly[0].count_rides, 27);
    assert_eq!(report.seasonly[1].type_of_rides, RiderType::Registered);
    assert_eq!(report.seasonly[1].count_rides, 66);
    assert_eq!(report.seasonly[2].season, Season::Summer);
    assert_eq!(report.seasonly[3].count_rides, 104);

    // Only the weekdays present in the data appear
    assert_eq!(report.weekday.len(), 4);
    assert_eq!(report.weekday[0].weekday, Weekday::Saturday);
    assert_eq!(report.weekday[0].count_rides, 31);
    assert_eq!(report.weekday[2].weekday, Weekday::Sunday);
    assert_eq!(report.weekday[3].count_rides, 91);

    let hours: Vec<u8> = report.hourly.iter().map(|h| h.hr).collect();
    assert_eq!(hours, vec![0, 8, 17]);
    assert_eq!(report.hourly[1].total_rides, 90);

    // RFM anchored on the latest filtered date (2011-04-03, a Sunday)
    assert_eq!(report.rfm.len(), 2);
    let saturday = &report.rfm[0];
    assert_eq!(saturday.day, Weekday::Saturday);
    assert_eq!(saturday.frequency, 6);
    assert_eq!(saturday.monetary, 110);
    assert_eq!(saturday.recency, 1);
    let sunday = &report.rfm[1];
    assert_eq!(sunday.day, Weekday::Sunday);
    assert_eq!(sunday.monetary, 129);
    assert_eq!(sunday.recency, 0);

    assert_eq!(report.rfm_summary.avg_frequency, 6.0);
    assert_eq!(report.rfm_summary.avg_recency, 0.5);
    assert_eq!(report.rfm_summary.avg_monetary, 119.5);

    assert_eq!(report.top_recency[0].day, Weekday::Sunday);
    assert_eq!(report.top_monetary[0].day, Weekday::Sunday);
}

#[test]
fn test_report_respects_date_window() {
    let bytes = include_bytes!("fixtures/sample_rides.csv");
    let records = parse_records(bytes).expect("Failed to parse ride data");
    let dataset = RideDataset::from_records(records);

    let start = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2011, 1, 31).unwrap();
    let report = build_report(&dataset, start, end);

    assert_eq!(report.filtered_records, 6);
    assert_eq!(report.totals.total_rides, 93);

    let months: Vec<&str> = report.monthly.iter().map(|m| m.yearmonth.as_str()).collect();
    assert_eq!(months, vec!["Jan-11"]);

    // April rows are gone, so only Spring remains
    assert_eq!(report.seasonly.len(), 2);
    assert_eq!(report.seasonly[0].season, Season::Spring);

    // Recency re-anchors on the window's own latest date (2011-01-09)
    let saturday = &report.rfm[0];
    assert_eq!(saturday.frequency, 3);
    assert_eq!(saturday.recency, 1);
    let sunday = &report.rfm[1];
    assert_eq!(sunday.recency, 0);
}

#[test]
fn test_report_serializes_with_chart_column_names() {
    let bytes = include_bytes!("fixtures/sample_rides.csv");
    let records = parse_records(bytes).expect("Failed to parse ride data");
    let dataset = RideDataset::from_records(records);

    let (start, end) = dataset.date_span().unwrap();
    let report = build_report(&dataset, start, end);
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["monthly"][0]["yearmonth"], "Jan-11");
    assert_eq!(json["seasonly"][0]["type_of_rides"], "casual_rides");
    assert_eq!(json["weekday"][0]["weekday"], "Saturday");
    assert_eq!(json["hourly"][0]["hr"], 0);
    assert_eq!(json["rfm"][1]["day"], "Sunday");
    assert_eq!(json["rfm"][1]["recency"], 0);
}
