//! End-to-end runs of the generation pipeline against real xlsx files.

mod common;

use common::{write_workbook, Fixture, SheetRow, HEADER, SHEET};
use indoc::indoc;
use interfgen::{
    generate, Error, GenerateRequest, MarkerConvention, NoInterfLayout, ProcessingOptions,
    SlotPolicy, ZoneOrder,
};
use pretty_assertions::assert_eq;

fn request(fixture: &Fixture) -> GenerateRequest {
    GenerateRequest::new(&fixture.excel, SHEET, &fixture.chart, &fixture.summary)
}

#[test]
fn test_wheel_pair_end_to_end() {
    let fixture = Fixture::new(&common::wheel_pair_rows());

    let report = generate(&request(&fixture)).unwrap();

    assert_eq!(report.rows_loaded, 5);
    assert_eq!(report.chart_rows, 2);
    assert_eq!(report.summary_rows, 1);
    assert_eq!(report.stats.dynamic_rows, 1);
    assert_eq!(report.stats.pairs_processed, 1);

    let expected_chart = concat!(
        "pagina\tnome\tvisiblePlc\tType\tRotation\tPeriod\tTitle\tFunctionType\tNoInterf1\tNoInterf2\n",
        "Wheel1_01\tChartLeft\t\tDoughnut\t0\t360\tWheel1\tAxe1_RefPosition\t",
        "DB_Motion_StartNoInterference_Wheel2_10,DB_Motion_EndNoInterference_Wheel2_11\t\n",
        "Wheel1_01\tChartRight\t\tDoughnut\t0\t360\tWheel2\tAxe2_RefPosition\t",
        "DB_Motion_StartNoInterference_Wheel1_20,DB_Motion_EndNoInterference_Wheel1_21\t\n",
    );
    assert_eq!(fixture.read_chart(), expected_chart);
    assert_eq!(
        fixture.read_summary(),
        "pagina\tInterferences\nWheel1_01\tInterferences : Wheel1/Wheel2\n"
    );
}

#[test]
fn test_pages_sorted_by_zone_order_then_sequence() {
    let fixture = Fixture::new(&[
        SheetRow::dynamic("MC_A_MC_B", "Exit_01"),
        SheetRow::dynamic("MC_C_MC_D", "Unknown"),
        SheetRow::dynamic("MC_E_MC_F", "Infeed_02"),
        SheetRow::dynamic("MC_G_MC_H", "Infeed_01"),
    ]);

    generate(&request(&fixture)).unwrap();

    assert_eq!(
        fixture.read_summary(),
        indoc! {"
            pagina\tInterferences
            Infeed_01\tInterferences : G/H
            Infeed_02\tInterferences : E/F
            Exit_01\tInterferences : A/B
            Unknown\tInterferences : C/D
        "}
    );
    let pages: Vec<String> = fixture
        .read_chart()
        .lines()
        .skip(1)
        .map(|line| line.split('\t').next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        pages,
        [
            "Infeed_01",
            "Infeed_01",
            "Infeed_02",
            "Infeed_02",
            "Exit_01",
            "Exit_01",
            "Unknown",
            "Unknown"
        ]
    );
}

#[test]
fn test_custom_zone_order_changes_sorting() {
    let fixture = Fixture::new(&[
        SheetRow::dynamic("MC_A_MC_B", "Infeed_01"),
        SheetRow::dynamic("MC_C_MC_D", "Exit_01"),
    ]);
    let zones = ZoneOrder::new(["Exit", "Infeed"]).unwrap();

    generate(&request(&fixture).with_zone_order(zones)).unwrap();

    assert_eq!(
        fixture.read_summary(),
        indoc! {"
            pagina\tInterferences
            Exit_01\tInterferences : C/D
            Infeed_01\tInterferences : A/B
        "}
    );
}

#[test]
fn test_literal_markers_with_split_layout() {
    let mut rows = common::wheel_pair_rows();
    rows.push(SheetRow::marker("MC_Wheel1", "StartNoInterference2nd_Wheel2", 30.0));
    rows.push(SheetRow::marker("MC_Wheel1", "EndNoInterference2nd_Wheel2", 31.0));
    let fixture = Fixture::new(&rows);
    let options = ProcessingOptions::default()
        .with_markers(MarkerConvention::Literal)
        .with_no_interf_layout(NoInterfLayout::Split);

    generate(&request(&fixture).with_options(options)).unwrap();

    let chart = fixture.read_chart();
    let first_motor: Vec<&str> = chart.lines().nth(1).unwrap().split('\t').collect();
    assert_eq!(
        first_motor[8],
        "DB_Motion_StartNoInterference_Wheel2_10,DB_Motion_EndNoInterference_Wheel2_11"
    );
    assert_eq!(
        first_motor[9],
        "DB_Motion_StartNoInterference2nd_Wheel2_30,DB_Motion_EndNoInterference2nd_Wheel2_31"
    );
}

#[test]
fn test_merged_layout_appends_second_zone() {
    let mut rows = common::wheel_pair_rows();
    rows.push(SheetRow::marker("MC_Wheel1", "StartNoInterference2nd_Wheel2", 30.0));
    rows.push(SheetRow::marker("MC_Wheel1", "EndNoInterference2nd_Wheel2", 31.0));
    let fixture = Fixture::new(&rows);

    generate(&request(&fixture)).unwrap();

    let chart = fixture.read_chart();
    let first_motor: Vec<&str> = chart.lines().nth(1).unwrap().split('\t').collect();
    assert_eq!(
        first_motor[8],
        "DB_Motion_StartNoInterference_Wheel2_10,DB_Motion_EndNoInterference_Wheel2_11,\
         DB_Motion_StartNoInterference2nd_Wheel2_30,DB_Motion_EndNoInterference2nd_Wheel2_31"
    );
    assert_eq!(first_motor[9], "");
}

#[test]
fn test_fixed_slots_repeat_left_and_right_per_pair() {
    let fixture = Fixture::new(&[
        SheetRow::dynamic("MC_A_MC_B", "Wheel1_01"),
        SheetRow::dynamic("MC_C_MC_D", "Wheel1_01"),
    ]);
    let options = ProcessingOptions::default().with_slots(SlotPolicy::Fixed);

    let report = generate(&request(&fixture).with_options(options)).unwrap();

    assert_eq!(report.chart_rows, 4);
    let slots: Vec<String> = fixture
        .read_chart()
        .lines()
        .skip(1)
        .map(|line| line.split('\t').nth(1).unwrap_or_default().to_string())
        .collect();
    assert_eq!(slots, ["ChartLeft", "ChartRight", "ChartLeft", "ChartRight"]);
}

#[test]
fn test_missing_columns_are_reported_together() {
    let header = ["DescrizioneRadice", "DescrizioneEstensione", "DataType", "New Page"];
    let fixture = Fixture::with_header(&header, &[]);

    let err = generate(&request(&fixture)).unwrap_err();

    match err {
        Error::Schema { sheet, missing } => {
            assert_eq!(sheet, SHEET);
            assert_eq!(missing, ["ObjectType", "Index"]);
        }
        other => panic!("expected schema error, got {other:?}"),
    }
    assert!(!fixture.chart.exists());
    assert!(!fixture.summary.exists());
}

#[test]
fn test_no_dynamic_rows_leaves_outputs_untouched() {
    let fixture = Fixture::new(&[SheetRow::marker(
        "MC_Wheel1",
        "StartNoInterference_Wheel2",
        1.0,
    )]);
    std::fs::write(&fixture.chart, "previous chart\n").unwrap();

    let err = generate(&request(&fixture)).unwrap_err();

    assert!(matches!(err, Error::EmptyResult));
    assert_eq!(fixture.read_chart(), "previous chart\n");
    assert!(!fixture.summary.exists());
}

#[test]
fn test_only_malformed_roots_writes_header_only_files() {
    let fixture = Fixture::new(&[SheetRow::dynamic("MC_Wheel1", "Wheel1_01")]);

    let report = generate(&request(&fixture)).unwrap();

    assert_eq!(report.stats.malformed_roots, 1);
    assert_eq!(report.chart_rows, 0);
    assert_eq!(fixture.read_summary(), "pagina\tInterferences\n");
    assert_eq!(fixture.read_chart().lines().count(), 1);
}

#[test]
fn test_missing_input_file() {
    let fixture = Fixture::new(&[]);
    let missing = fixture.dir.path().join("absent.xlsx");
    let request = GenerateRequest::new(&missing, SHEET, &fixture.chart, &fixture.summary);

    assert!(matches!(generate(&request), Err(Error::NotFound { .. })));
}

#[test]
fn test_unsupported_extension() {
    let fixture = Fixture::new(&[]);
    let csv = fixture.dir.path().join("vars.csv");
    std::fs::write(&csv, "DescrizioneRadice\n").unwrap();
    let request = GenerateRequest::new(&csv, SHEET, &fixture.chart, &fixture.summary);

    match generate(&request) {
        Err(Error::Format { extension, .. }) => assert_eq!(extension, ".csv"),
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn test_unknown_sheet_name() {
    let fixture = Fixture::new(&common::wheel_pair_rows());
    let request = GenerateRequest::new(&fixture.excel, "Missing", &fixture.chart, &fixture.summary);

    match generate(&request) {
        Err(Error::Sheet { sheet, .. }) => assert_eq!(sheet, "Missing"),
        other => panic!("expected sheet error, got {other:?}"),
    }
    assert!(!fixture.chart.exists());
}

#[test]
fn test_generation_is_idempotent() {
    let fixture = Fixture::new(&common::wheel_pair_rows());

    generate(&request(&fixture)).unwrap();
    let first = (fixture.read_chart(), fixture.read_summary());
    generate(&request(&fixture)).unwrap();
    let second = (fixture.read_chart(), fixture.read_summary());

    assert_eq!(first, second);
}

#[test]
fn test_headers_with_surrounding_spaces_are_accepted() {
    let fixture = Fixture::new(&[]);
    let padded = fixture.dir.path().join("padded.xlsx");
    let header: Vec<String> = HEADER.iter().map(|h| format!(" {} ", h)).collect();
    let header: Vec<&str> = header.iter().map(String::as_str).collect();
    write_workbook(&padded, SHEET, &header, &common::wheel_pair_rows());
    let request = GenerateRequest::new(&padded, SHEET, &fixture.chart, &fixture.summary);

    let report = generate(&request).unwrap();
    assert_eq!(report.chart_rows, 2);
}
