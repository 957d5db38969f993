use chart_layout::api::{
    CategoryAxisConfig, ChartConfig, ChartGeometry, SeriesConfig, SeriesMarks, compute_layout,
};
use chart_layout::core::{DataPoint, Insets, Viewport};
use proptest::prelude::*;

fn bar_chart(categories: usize, series: usize) -> ChartConfig {
    let labels: Vec<String> = (0..categories).map(|index| format!("c{index}")).collect();
    let series = (0..series)
        .map(|ordinal| {
            let data = labels
                .iter()
                .map(|label| DataPoint::new(label.clone(), (ordinal + 1) as f64))
                .collect();
            SeriesConfig::bar(format!("s{ordinal}"), "#4e79a7", data)
        })
        .collect();
    ChartConfig::new(series)
        .with_x_axis(CategoryAxisConfig::new(labels))
        .with_padding(Insets::uniform(0.0))
}

proptest! {
    #[test]
    fn neighbouring_bar_groups_stay_apart(
        width in 20u32..1_200,
        categories in 1usize..12,
        series in 1usize..5
    ) {
        let config = bar_chart(categories, series);
        let ChartGeometry::Cartesian(geometry) =
            compute_layout(&config, Viewport::new(width, 100)).expect("layout")
        else {
            panic!("expected cartesian geometry");
        };

        // Horizontal extent of every category group.
        let mut extents = vec![(f64::INFINITY, f64::NEG_INFINITY); categories];
        for projected in &geometry.series {
            let SeriesMarks::Bar { rects } = &projected.marks else {
                panic!("expected bar marks");
            };
            prop_assert_eq!(rects.len(), categories);
            for (index, rect) in rects.iter().enumerate() {
                prop_assert!(rect.width >= 0.0);
                extents[index].0 = extents[index].0.min(rect.x);
                extents[index].1 = extents[index].1.max(rect.x + rect.width);
            }
        }

        for pair in extents.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].0 + 1e-6);
        }
        prop_assert!(extents[0].0 >= -1e-6);
        prop_assert!(extents[categories - 1].1 <= f64::from(width) + 1e-6);
    }
}
