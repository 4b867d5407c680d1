//! Binary morphological dilation
//!
//! Dilation grows foreground regions so that the separate strokes of one
//! handwritten word fuse into a single blob.
//!
//! Both entry points use the same window convention: for a SEL with origin
//! `(cx, cy)` the output pixel `(x, y)` is the OR of `src(x + dx, y + dy)`
//! over every hit offset `(dx, dy)`. Pixels outside the image count as
//! background, so dilation never pulls foreground in from the border.

use crate::{MorphError, MorphResult, Sel};
use inkseg_core::{Pix, PixMut, PixelDepth};

/// Dilate a binary image with an arbitrary structuring element
///
/// Cost is `O(width * height * hits)`; brick SELs are routed to
/// [`dilate_brick`], which is independent of the SEL size.
pub fn dilate(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_binary(pix)?;
    if sel.is_brick() && sel.origin_x() == sel.width() / 2 && sel.origin_y() == sel.height() / 2
    {
        return dilate_brick(pix, sel.width(), sel.height());
    }

    let w = pix.width() as i32;
    let h = pix.height() as i32;
    let offsets: Vec<(i32, i32)> = sel.hit_offsets().collect();
    let mut out = PixMut::new(pix.width(), pix.height(), PixelDepth::Bit1)?;

    for y in 0..h {
        for x in 0..w {
            let hit = offsets.iter().any(|&(dx, dy)| {
                let (sx, sy) = (x + dx, y + dy);
                sx >= 0
                    && sy >= 0
                    && sx < w
                    && sy < h
                    && pix.get_pixel_unchecked(sx as u32, sy as u32) != 0
            });
            if hit {
                out.set_pixel_unchecked(x as u32, y as u32, 1);
            }
        }
    }
    Ok(out.into())
}

/// Dilate a binary image with a `hsize` x `vsize` brick
///
/// The brick is separable, so this runs a horizontal pass followed by a
/// vertical pass. Each pass slides a window of the brick's extent along one
/// line using a running foreground count, giving a cost proportional to the
/// image area regardless of the brick size.
///
/// # Errors
///
/// Returns [`MorphError::InvalidParameters`] if either size is zero and
/// [`MorphError::UnsupportedDepth`] if the image is not 1 bpp.
pub fn dilate_brick(pix: &Pix, hsize: u32, vsize: u32) -> MorphResult<Pix> {
    check_binary(pix)?;
    if hsize == 0 || vsize == 0 {
        return Err(MorphError::InvalidParameters(format!(
            "brick size must be positive: {hsize}x{vsize}"
        )));
    }
    if hsize == 1 && vsize == 1 {
        return Ok(pix.clone());
    }

    let w = pix.width() as usize;
    let h = pix.height() as usize;
    let mut grid = vec![false; w * h];
    for y in 0..h {
        for x in 0..w {
            grid[y * w + x] = pix.get_pixel_unchecked(x as u32, y as u32) != 0;
        }
    }

    if hsize > 1 {
        let mut line = vec![false; w];
        for y in 0..h {
            let row = &mut grid[y * w..(y + 1) * w];
            dilate_line(row, &mut line, hsize);
            row.copy_from_slice(&line);
        }
    }

    if vsize > 1 {
        let mut column = vec![false; h];
        let mut line = vec![false; h];
        for x in 0..w {
            for (y, c) in column.iter_mut().enumerate() {
                *c = grid[y * w + x];
            }
            dilate_line(&column, &mut line, vsize);
            for (y, &v) in line.iter().enumerate() {
                grid[y * w + x] = v;
            }
        }
    }

    let mut out = PixMut::new(pix.width(), pix.height(), PixelDepth::Bit1)?;
    write_grid(&mut out, &grid, w);
    Ok(out.into())
}

/// Apply [`dilate_brick`] `iterations` times
///
/// Zero iterations returns an unchanged copy.
pub fn dilate_brick_iter(pix: &Pix, hsize: u32, vsize: u32, iterations: u32) -> MorphResult<Pix> {
    check_binary(pix)?;
    let mut current = pix.clone();
    for _ in 0..iterations {
        current = dilate_brick(&current, hsize, vsize)?;
    }
    Ok(current)
}

/// One-dimensional dilation of `src` into `dst` with a window of `size`.
///
/// The window for position `i` covers `[i - size/2, i - size/2 + size - 1]`.
fn dilate_line(src: &[bool], dst: &mut [bool], size: u32) {
    let n = src.len() as i64;
    let size = size as i64;
    let lo_off = -(size / 2);
    let hi_off = lo_off + size - 1;

    // prefix[i] = number of set entries in src[..i]
    let mut prefix = Vec::with_capacity(src.len() + 1);
    prefix.push(0u32);
    let mut acc = 0u32;
    for &v in src {
        acc += u32::from(v);
        prefix.push(acc);
    }

    for (i, d) in dst.iter_mut().enumerate() {
        let lo = (i as i64 + lo_off).clamp(0, n);
        let hi = (i as i64 + hi_off + 1).clamp(0, n);
        *d = prefix[hi as usize] > prefix[lo as usize];
    }
}

fn write_grid(out: &mut PixMut, grid: &[bool], w: usize) {
    for (i, _) in grid.iter().enumerate().filter(|(_, v)| **v) {
        out.set_pixel_unchecked((i % w) as u32, (i / w) as u32, 1);
    }
}

/// Check that the image is binary (1 bpp)
pub(crate) fn check_binary(pix: &Pix) -> MorphResult<()> {
    if pix.depth() != PixelDepth::Bit1 {
        return Err(MorphError::UnsupportedDepth {
            expected: "1-bpp binary",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}
