use std::io::Write;

use scatter_marginals::PlotError;
use scatter_marginals::data::{
    CsvColumns, CsvLoadOptions, ValueTransform, default_synthetic_conditions, generate_records,
    load_records_from_path, load_records_from_reader,
};

const WING_DISC_CSV: &str = "\
area,D,condition,replicate
1.5,0.9,Standard,1
2.1,1.3,Hypoxia,1
NaN,1.0,Standard,2
abc,1.0,Standard,3
,1.1,Hypoxia,2
1.7,Infinity,LowTemp,1
1.9,1.6,,1
2.4, 1.8 ,LowTemp,2
";

#[test]
fn unusable_rows_are_skipped_and_counted() {
    let (records, report) =
        load_records_from_reader(WING_DISC_CSV.as_bytes(), &CsvLoadOptions::default())
            .expect("load csv");

    assert_eq!(report.rows_read, 8);
    assert_eq!(report.records_kept, 3);
    assert_eq!(report.rows_skipped, 5);
    assert_eq!(records.len(), 3);

    let last = &records[2];
    assert_eq!(last.x, 2.4);
    assert_eq!(last.y, 1.8);
    assert_eq!(last.condition.as_str(), "LowTemp");
    assert!(records.iter().all(|record| record.is_finite()));
}

#[test]
fn missing_column_fails_the_load() {
    let input = "area,lambda,condition\n1.0,2.0,Standard\n";
    let err = load_records_from_reader(input.as_bytes(), &CsvLoadOptions::default())
        .expect_err("missing D column");

    match err {
        PlotError::InvalidData(message) => assert!(message.contains("`D`")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn custom_columns_and_transforms_apply() {
    let input = "size,speed,group\n1000,2,cold\n10,4,warm\n";
    let options = CsvLoadOptions {
        columns: CsvColumns {
            x: "size".to_owned(),
            y: "speed".to_owned(),
            condition: "group".to_owned(),
        },
        x_transform: ValueTransform::Log10,
        y_transform: ValueTransform::Scale(0.5),
    };

    let (records, report) = load_records_from_reader(input.as_bytes(), &options).expect("load");
    assert_eq!(report.rows_skipped, 0);
    assert_eq!(records.len(), 2);
    assert!((records[0].x - 3.0).abs() < 1e-12);
    assert_eq!(records[0].y, 1.0);
    assert_eq!(records[1].condition.as_str(), "warm");
}

#[test]
fn loads_from_a_file_path() {
    let path = std::env::temp_dir().join(format!(
        "scatter_marginals_load_{}.csv",
        std::process::id()
    ));
    {
        let mut file = std::fs::File::create(&path).expect("create temp csv");
        file.write_all(WING_DISC_CSV.as_bytes()).expect("write temp csv");
    }

    let result = load_records_from_path(&path, &CsvLoadOptions::default());
    let _ = std::fs::remove_file(&path);
    let (records, _) = result.expect("load from path");
    assert_eq!(records.len(), 3);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_records_from_path(
        "/definitely/not/here/records.csv",
        &CsvLoadOptions::default(),
    )
    .expect_err("missing file");
    assert!(matches!(err, PlotError::Io(_)));
}

#[test]
fn synthetic_records_are_reproducible() {
    let conditions = default_synthetic_conditions();
    let first = generate_records(&conditions, 42).expect("generate");
    let second = generate_records(&conditions, 42).expect("generate");
    let other = generate_records(&conditions, 43).expect("generate");

    assert_eq!(first.len(), 450);
    assert_eq!(first, second);
    assert_ne!(first, other);

    for name in ["Standard", "Hypoxia", "LowTemp"] {
        let count = first
            .iter()
            .filter(|record| record.condition.as_str() == name)
            .count();
        assert_eq!(count, 150);
    }
}
