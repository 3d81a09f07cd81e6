#![cfg(feature = "parallel-binning")]

use scatter_marginals::core::{
    Axis, BinLayout, Condition, LinearScale, MarginalHistogram, VisibilitySet,
};
use scatter_marginals::data::{SyntheticCondition, generate_records};

#[test]
fn parallel_series_match_serial_binning_in_condition_order() {
    let conditions: Vec<SyntheticCondition> = (0..12)
        .map(|index| {
            let shift = index as f64 * 0.1;
            SyntheticCondition::new(
                format!("C{index}"),
                200 + index * 10,
                (1.5 + shift, 0.3),
                (1.0 + shift, 0.2),
            )
        })
        .collect();
    let records = generate_records(&conditions, 99).expect("records");
    let names: Vec<Condition> = conditions
        .iter()
        .map(|condition| Condition::new(condition.name.clone()))
        .collect();
    let mut visibility = VisibilitySet::new();
    visibility.set_visible("C4", false);

    let scale = LinearScale::from_extent(records.iter().map(|record| record.x), (0.0, 500.0), 10)
        .expect("scale");
    let histogram =
        MarginalHistogram::compute(&records, &names, &visibility, Axis::X, scale, 20)
            .expect("histogram");

    let (d0, d1) = scale.domain();
    let layout = BinLayout::new((d0, d1), 20).expect("layout");
    let expected: Vec<(String, Vec<usize>)> = names
        .iter()
        .filter(|name| name.as_str() != "C4")
        .map(|name| {
            let bins = layout.bin(
                records
                    .iter()
                    .filter(|record| &record.condition == name)
                    .map(|record| record.x),
            );
            (
                name.as_str().to_owned(),
                bins.iter().map(|bin| bin.count).collect(),
            )
        })
        .collect();
    let actual: Vec<(String, Vec<usize>)> = histogram
        .series
        .iter()
        .map(|series| {
            (
                series.condition.as_str().to_owned(),
                series.bins.iter().map(|bin| bin.count).collect(),
            )
        })
        .collect();

    assert_eq!(actual, expected);
}
