use marker_sheet_core::coordinator::coordinate;
use marker_sheet_core::error::CapacityError;
use marker_sheet_core::model::{Assignment, Placement};

fn positions(n: usize) -> Vec<Placement> {
    (0..n).map(|i| Placement::new(i as f64 * 10.0, 0.0)).collect()
}

fn pairs(out: &[Assignment]) -> Vec<(i64, Placement)> {
    out.iter().map(|a| (a.code, a.placement)).collect()
}

#[test]
fn lone_code_tiles_every_position() {
    let p = positions(4);
    let out = coordinate(&[7], p.clone()).unwrap();
    assert_eq!(
        pairs(&out),
        vec![(7, p[0]), (7, p[1]), (7, p[2]), (7, p[3])]
    );
}

#[test]
fn lone_code_single_position() {
    let p = positions(1);
    let out = coordinate(&[42], p.clone()).unwrap();
    assert_eq!(pairs(&out), vec![(42, p[0])]);
}

#[test]
fn codes_pair_in_order() {
    let p = positions(2);
    let out = coordinate(&[5, 9], p.clone()).unwrap();
    assert_eq!(pairs(&out), vec![(5, p[0]), (9, p[1])]);
}

#[test]
fn fewer_codes_than_positions_leaves_the_rest_empty() {
    let p = positions(4);
    let out = coordinate(&[1, 2, 3], p.clone()).unwrap();
    assert_eq!(pairs(&out), vec![(1, p[0]), (2, p[1]), (3, p[2])]);
}

#[test]
fn too_many_codes_fail_with_both_counts() {
    let err = coordinate(&[1, 2, 3], positions(2)).unwrap_err();
    assert_eq!(
        err,
        CapacityError {
            codes: 3,
            positions: 2
        }
    );
    assert_eq!(err.to_string(), "cannot fit 3 markers into 2 space(s)");
}

#[test]
fn no_codes_is_a_capacity_error() {
    let err = coordinate(&[], positions(4)).unwrap_err();
    assert_eq!(err.codes, 0);
    assert_eq!(err.positions, 4);
}

#[test]
fn duplicate_and_negative_codes_pass_through() {
    let p = positions(4);
    let out = coordinate(&[3, 3, -1, 0], p).unwrap();
    let codes: Vec<i64> = out.iter().map(|a| a.code).collect();
    assert_eq!(codes, vec![3, 3, -1, 0]);
}
