use crate::{
    CoordinateSystem, CoreError, ImplementWidth, covered_area_m2, estimate_area, round_hectares,
    tests::support::segment,
};

const WIDTH_M: f64 = 3.0;
const AREA_TOLERANCE_M2: f64 = 1e-3;

fn width() -> ImplementWidth {
    ImplementWidth::new(WIDTH_M).unwrap()
}

/// WHAT: A 100 m pass with a 3 m implement covers 0.03 ha
/// WHY: Pins the square-meter to hectare conversion
#[test]
fn given_hundred_meter_pass_when_estimating_then_three_hundredths_of_hectare() {
    // Given: One straight 100 m segment
    let segments = [segment(&[(0.0, 0.0), (0.0, 100.0)])];

    // When: Estimating with a 3 m implement
    let hectares = estimate_area(&segments, width(), CoordinateSystem::Planar).unwrap();

    // Then: 300 m² = 0.03 ha
    assert_eq!(hectares, 0.03);
}

/// WHAT: No qualifying segment means no area
/// WHY: Single fixes and empty segments cannot form a line
#[test]
fn given_only_short_segments_when_estimating_then_zero() {
    // Given: An empty segment and a single-point segment
    let segments = [segment(&[]), segment(&[(4.0, 2.0)])];

    // When: Estimating
    let hectares = estimate_area(&segments, width(), CoordinateSystem::Planar).unwrap();

    // Then: Zero
    assert_eq!(hectares, 0.0);
    assert_eq!(estimate_area(&[], width(), CoordinateSystem::Planar).unwrap(), 0.0);
}

/// WHAT: Estimating twice yields the identical value
/// WHY: The estimator is pure and must not carry hidden state
#[test]
fn given_same_segments_when_estimating_twice_then_identical_result() {
    // Given: A winding segment
    let segments = [segment(&[
        (0.0, 0.0),
        (20.0, 5.0),
        (25.0, 40.0),
        (3.0, 38.0),
        (10.0, 10.0),
    ])];

    // When: Estimating twice
    let first = covered_area_m2(&segments, width(), CoordinateSystem::Planar).unwrap();
    let second = covered_area_m2(&segments, width(), CoordinateSystem::Planar).unwrap();

    // Then: Bit-for-bit equal
    assert_eq!(first.to_bits(), second.to_bits());
}

/// WHAT: Disjoint corridors add up
/// WHY: Union must equal the plain sum when nothing overlaps
#[test]
fn given_disjoint_segments_when_estimating_then_union_equals_sum() {
    // Given: Two parallel passes 50 m apart
    let left = segment(&[(0.0, 0.0), (0.0, 100.0)]);
    let right = segment(&[(50.0, 0.0), (50.0, 100.0), (80.0, 130.0)]);

    // When: Estimating separately and together
    let left_only = covered_area_m2(&[left.clone()], width(), CoordinateSystem::Planar).unwrap();
    let right_only = covered_area_m2(&[right.clone()], width(), CoordinateSystem::Planar).unwrap();
    let both = covered_area_m2(&[left, right], width(), CoordinateSystem::Planar).unwrap();

    // Then: Sum within tolerance
    assert!((both - (left_only + right_only)).abs() < AREA_TOLERANCE_M2);
}

/// WHAT: A copied segment does not double the area
/// WHY: Ground covered twice is still covered once
#[test]
fn given_identical_segments_when_estimating_then_area_counted_once() {
    // Given: Segment B is a copy of segment A
    let pass = segment(&[(0.0, 0.0), (0.0, 100.0), (30.0, 100.0)]);

    // When: Estimating A alone and A with B
    let single = covered_area_m2(&[pass.clone()], width(), CoordinateSystem::Planar).unwrap();
    let doubled = covered_area_m2(&[pass.clone(), pass], width(), CoordinateSystem::Planar).unwrap();

    // Then: Same area
    assert!((single - doubled).abs() < AREA_TOLERANCE_M2);
}

/// WHAT: Partially overlapping passes count shared ground once
/// WHY: Adjacent swaths overlap whenever the driver steers tight
#[test]
fn given_half_overlapping_passes_when_estimating_then_overlap_subtracted() {
    // Given: Two passes 1.5 m apart with a 3 m implement
    let first = segment(&[(0.0, 0.0), (0.0, 100.0)]);
    let second = segment(&[(1.5, 0.0), (1.5, 100.0)]);

    // When: Estimating
    let covered = covered_area_m2(&[first, second], width(), CoordinateSystem::Planar).unwrap();

    // Then: 4.5 m wide strip
    assert!((covered - 450.0).abs() < AREA_TOLERANCE_M2);
}

/// WHAT: A degenerate segment is skipped, not fatal
/// WHY: One bad segment must not abort the whole estimate
#[test]
fn given_one_degenerate_segment_when_estimating_then_other_segments_still_counted() {
    // Given: A valid pass and a segment of identical fixes
    let segments = [
        segment(&[(0.0, 0.0), (0.0, 100.0)]),
        segment(&[(7.0, 7.0), (7.0, 7.0)]),
    ];

    // When: Estimating
    let hectares = estimate_area(&segments, width(), CoordinateSystem::Planar).unwrap();

    // Then: Only the valid pass contributes
    assert_eq!(hectares, 0.03);
}

/// WHAT: Geographic traces are measured in meters on the ground
/// WHY: Longitude/latitude degrees are not a unit of area
#[test]
fn given_geographic_pass_when_estimating_then_area_in_hectares() {
    // Given: ~1 km due north along the prime meridian
    let segments = [segment(&[(0.0, 0.0), (0.0, 0.009)])];

    // When: Estimating with a 3 m implement
    let hectares = estimate_area(&segments, width(), CoordinateSystem::Geographic).unwrap();

    // Then: ~1000.76 m x 3 m = 0.30 ha
    assert_eq!(hectares, 0.3);
}

/// WHAT: An overflowing union area is reported, not returned
/// WHY: Callers must be able to keep their previous figure
#[test]
fn given_overflowing_coordinates_when_estimating_then_area_computation_failed() {
    // Given: A corridor whose area exceeds f64
    let huge_width = ImplementWidth::new(1e200).unwrap();
    let segments = [segment(&[(0.0, 0.0), (0.0, 1e200)])];

    // When: Estimating
    let result = estimate_area(&segments, huge_width, CoordinateSystem::Planar);

    // Then: AreaComputationFailed
    assert!(matches!(
        result,
        Err(CoreError::AreaComputationFailed { .. })
    ));
}

/// WHAT: Display rounding goes to two decimals
/// WHY: Area is shown in hundredths of a hectare
#[test]
fn given_fractional_hectares_when_rounding_then_two_decimals() {
    assert_eq!(round_hectares(0.0349), 0.03);
    assert_eq!(round_hectares(0.0351), 0.04);
    assert_eq!(round_hectares(12.344), 12.34);
}
