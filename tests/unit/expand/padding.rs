use super::*;

#[test]
fn even_split_without_gaps() {
    let p = distribute_padding(100.0, AxisInsets::new(10.0, 10.0), AxisInsets::default(), None);
    assert_eq!(p, AxisInsets::new(50.0, 50.0));
}

#[test]
fn split_follows_existing_gap_proportions() {
    let p = distribute_padding(
        200.0,
        AxisInsets::new(20.0, 20.0),
        AxisInsets::new(30.0, 10.0),
        None,
    );
    assert_eq!(p, AxisInsets::new(150.0, 50.0));
}

#[test]
fn focal_ratio_skews_the_split() {
    let p = distribute_padding(100.0, AxisInsets::default(), AxisInsets::default(), Some(1.0));
    assert_eq!(p, AxisInsets::new(75.0, 25.0));
}

#[test]
fn floor_is_restored_when_split_undershoots() {
    let p = distribute_padding(
        100.0,
        AxisInsets::new(40.0, 40.0),
        AxisInsets::new(0.0, 50.0),
        None,
    );
    assert_eq!(p, AxisInsets::new(40.0, 60.0));

    let p = distribute_padding(10.0, AxisInsets::new(40.0, 30.0), AxisInsets::default(), None);
    assert_eq!(p, AxisInsets::new(40.0, 30.0));
}

#[test]
fn asymmetry_measure() {
    assert_eq!(AxisInsets::new(0.0, 0.0).asymmetry(), 0.0);
    assert_eq!(AxisInsets::new(10.0, 10.0).asymmetry(), 0.0);
    assert_eq!(AxisInsets::new(30.0, 10.0).asymmetry(), 0.5);
    assert_eq!(AxisInsets::new(0.0, 10.0).asymmetry(), 1.0);
}
