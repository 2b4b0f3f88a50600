//! Property tests for area aggregation and reporting.

use proptest::prelude::*;

use planimeter::{Area, AreaAggregator, AreaReport, CubedAreaCalculator, ShapeSpec};

fn shape_spec() -> impl Strategy<Value = ShapeSpec> {
    // Bounded finite dimensions; large enough to exercise negatives and
    // magnitude, small enough that sums stay comfortably finite.
    let dim = -1.0e6..1.0e6f64;
    prop_oneof![
        dim.clone().prop_map(|length| ShapeSpec::Square { length }),
        dim.clone().prop_map(|radius| ShapeSpec::Circle { radius }),
        dim.prop_map(|face| ShapeSpec::Cube { face }),
    ]
}

fn build_shapes(specs: &[ShapeSpec]) -> Vec<Box<dyn Area>> {
    specs
        .iter()
        .map(|spec| spec.into_shape().expect("finite dimensions"))
        .collect()
}

fn abs_area_sum(specs: &[ShapeSpec]) -> f64 {
    build_shapes(specs).iter().map(|s| s.area().abs()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Aggregation is a commutative sum - reversing the input
    /// sequence changes the result by at most float rounding noise.
    #[test]
    fn property_total_area_is_order_insensitive(
        specs in proptest::collection::vec(shape_spec(), 0..=16),
    ) {
        let forward = AreaAggregator::new(build_shapes(&specs)).total_area();

        let mut reversed_specs = specs.clone();
        reversed_specs.reverse();
        let reversed = AreaAggregator::new(build_shapes(&reversed_specs)).total_area();

        let tolerance = 1.0e-9 * (1.0 + abs_area_sum(&specs));
        prop_assert!(
            (forward - reversed).abs() <= tolerance,
            "forward={forward} reversed={reversed}"
        );
    }

    /// PROPERTY: Finite dimensions never produce a NaN or infinite total.
    #[test]
    fn property_total_area_is_finite(
        specs in proptest::collection::vec(shape_spec(), 0..=16),
    ) {
        let total = AreaAggregator::new(build_shapes(&specs)).total_area();
        prop_assert!(total.is_finite());
    }

    /// PROPERTY: The cubed-area figure is exactly the cube of the plain
    /// total over the same sequence (same shapes, same iteration order).
    #[test]
    fn property_cubed_area_is_cube_of_total(
        specs in proptest::collection::vec(shape_spec(), 0..=16),
    ) {
        let total = AreaAggregator::new(build_shapes(&specs)).total_area();
        let cubed = CubedAreaCalculator::new(build_shapes(&specs)).cubed_area();
        prop_assert_eq!(cubed, total * total * total);
    }

    /// PROPERTY: Renderings always follow their literal patterns and carry
    /// the two-decimal rounding of the total.
    #[test]
    fn property_renderings_follow_literal_patterns(
        specs in proptest::collection::vec(shape_spec(), 0..=16),
    ) {
        let aggregator = AreaAggregator::new(build_shapes(&specs));
        let report = AreaReport::new(&aggregator);
        let rounded = format!("{:.2}", aggregator.total_area());

        prop_assert_eq!(report.to_text(), format!("area is {rounded}"));
        prop_assert_eq!(report.to_json(), format!("{{area:{rounded}}}"));
    }
}

#[test]
fn empty_sequence_totals_zero() {
    let aggregator = AreaAggregator::new(Vec::new());
    assert_eq!(aggregator.total_area(), 0.0);
}
