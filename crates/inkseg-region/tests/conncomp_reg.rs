//! Connected component regression test
//!
//! Detects ink regions on a dilated synthetic handwriting line.
//!
//! Run with:
//! ```
//! cargo test -p inkseg-region --test conncomp_reg
//! ```

use inkseg_core::{Box, Boxa};
use inkseg_region::{ConnectivityType, component_boxes, find_connected_components};
use inkseg_test::{PageBuilder, RegParams};

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    // Strokes listed right to left; detection order follows the raster scan
    let page = PageBuilder::new(200, 60)
        .stroke(150, 20, 30, 20)
        .stroke(90, 10, 20, 30)
        .stroke(20, 25, 40, 15)
        .stroke(25, 45, 3, 3)
        .build()
        .unwrap();
    let mask = page.threshold_to_binary_inv(128).unwrap();

    let comps = find_connected_components(&mask, ConnectivityType::EightWay).unwrap();
    rp.compare_values(4.0, comps.len() as f64, 0.0);

    let total: u32 = comps.iter().map(|c| c.pixel_count).sum();
    rp.compare_values(mask.count_foreground().unwrap() as f64, total as f64, 0.0);

    let boxes = component_boxes(&mask, ConnectivityType::EightWay).unwrap();
    let expected: Boxa = vec![
        Box::new_unchecked(90, 10, 20, 30),
        Box::new_unchecked(150, 20, 30, 20),
        Box::new_unchecked(20, 25, 40, 15),
        Box::new_unchecked(25, 45, 3, 3),
    ]
    .into();
    rp.compare_boxa(&expected, &boxes);

    // Every detected box is inside the image and non-degenerate
    let inside = boxes
        .iter()
        .all(|b| b.is_valid() && b.right() <= 200 && b.bottom() <= 60);
    rp.compare_values(1.0, inside as u8 as f64, 0.0);

    // Labels are consecutive from 1
    for (i, c) in comps.iter().enumerate() {
        rp.compare_values(i as f64 + 1.0, c.label as f64, 0.0);
    }

    assert!(rp.cleanup());
}
