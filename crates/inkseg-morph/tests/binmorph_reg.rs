//! Binary dilation regression test
//!
//! Dilates the ink mask of a synthetic handwriting line and checks that
//! pieces of one word fuse while separate words stay apart.
//!
//! Run with:
//! ```
//! cargo test -p inkseg-morph --test binmorph_reg
//! ```

use inkseg_morph::{Sel, dilate, dilate_brick, dilate_brick_iter};
use inkseg_test::{PageBuilder, RegParams};

fn foreground_runs(pix: &inkseg_core::Pix, y: u32) -> usize {
    let mut runs = 0;
    let mut inside = false;
    for x in 0..pix.width() {
        let on = pix.get_pixel(x, y) == Some(1);
        if on && !inside {
            runs += 1;
        }
        inside = on;
    }
    runs
}

#[test]
fn binmorph_reg() {
    let mut rp = RegParams::new("binmorph");

    // Two words: three pieces 2 px apart, then a lone stroke 40 px away
    let page = PageBuilder::new(160, 40)
        .word(10, 10, 50, 18, 3, 2)
        .stroke(100, 12, 30, 14)
        .build()
        .unwrap();
    let mask = page.threshold_to_binary_inv(128).unwrap();
    let orig = mask.count_foreground().unwrap();
    rp.compare_values(3.0 + 1.0, foreground_runs(&mask, 15) as f64, 0.0);

    // One 4x4 pass closes a 2 px gap (window reaches 2 left, 1 right)
    let once = dilate_brick(&mask, 4, 4).unwrap();
    rp.compare_values(2.0, foreground_runs(&once, 15) as f64, 0.0);
    rp.compare_values(1.0, (once.count_foreground().unwrap() > orig) as u8 as f64, 0.0);

    // Two passes keep the distant stroke separate
    let twice = dilate_brick_iter(&mask, 4, 4, 2).unwrap();
    rp.compare_values(2.0, foreground_runs(&twice, 15) as f64, 0.0);

    // Dilation is extensive: every original ink pixel survives
    let mut lost = 0;
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if mask.get_pixel(x, y) == Some(1) && twice.get_pixel(x, y) != Some(1) {
                lost += 1;
            }
        }
    }
    rp.compare_values(0.0, lost as f64, 0.0);

    // SEL entry point agrees with the brick fast path
    let sel = Sel::create_brick(4, 4).unwrap();
    let generic = dilate(&mask, &sel).unwrap();
    rp.compare_pix(&once, &generic);

    assert!(rp.cleanup());
}
