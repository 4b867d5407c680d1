//! Connected component analysis
//!
//! Finds and labels connected foreground regions of binary images with a
//! two-pass union-find scan. Components are numbered in raster order of
//! their first (top-most, then left-most) pixel, so results are fully
//! deterministic for a given mask.

use crate::error::{RegionError, RegionResult};
use inkseg_core::{Box, Boxa, Pix, PixMut, PixelDepth};
use tracing::trace;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// A connected component in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Label of this component, starting at 1
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box of this component
    pub bounds: Box,
}

impl ConnectedComponent {
    /// Create a new connected component
    pub fn new(label: u32, pixel_count: u32, bounds: Box) -> Self {
        Self {
            label,
            pixel_count,
            bounds,
        }
    }
}

/// Disjoint-set forest over provisional labels
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        // Slot 0 is the background
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grand = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grand;
            x = grand;
        }
        x
    }

    fn union(&mut self, a: u32, b: u32) -> u32 {
        let ra = self.find(a);
        let rb = self.find(b);
        let (lo, hi) = if ra <= rb { (ra, rb) } else { (rb, ra) };
        self.parent[hi as usize] = lo;
        lo
    }
}

/// Label map produced by the scan: `labels[y * w + x]`, 0 for background.
struct Labeling {
    width: usize,
    labels: Vec<u32>,
    count: u32,
}

fn label_pixels(pix: &Pix, connectivity: ConnectivityType) -> RegionResult<Labeling> {
    if pix.depth() != PixelDepth::Bit1 {
        return Err(RegionError::UnsupportedDepth {
            expected: "1-bpp binary",
            actual: pix.depth().bits(),
        });
    }

    let w = pix.width() as usize;
    let h = pix.height() as usize;
    let mut labels = vec![0u32; w * h];
    let mut uf = UnionFind::new();

    // First pass: provisional labels from already-visited neighbours
    for y in 0..h {
        for x in 0..w {
            if pix.get_pixel_unchecked(x as u32, y as u32) == 0 {
                continue;
            }
            let mut current = 0u32;
            let mut visit = |n: u32, uf: &mut UnionFind| {
                if n != 0 {
                    current = if current == 0 { uf.find(n) } else { uf.union(current, n) };
                }
            };
            if x > 0 {
                visit(labels[y * w + x - 1], &mut uf);
            }
            if y > 0 {
                let up = (y - 1) * w;
                visit(labels[up + x], &mut uf);
                if connectivity == ConnectivityType::EightWay {
                    if x > 0 {
                        visit(labels[up + x - 1], &mut uf);
                    }
                    if x + 1 < w {
                        visit(labels[up + x + 1], &mut uf);
                    }
                }
            }
            labels[y * w + x] = if current == 0 { uf.make_set() } else { current };
        }
    }

    // Second pass: resolve roots and renumber in raster order of first pixel
    let mut final_label = vec![0u32; uf.parent.len()];
    let mut count = 0u32;
    for label in labels.iter_mut().filter(|l| **l != 0) {
        let root = uf.find(*label) as usize;
        if final_label[root] == 0 {
            count += 1;
            final_label[root] = count;
        }
        *label = final_label[root];
    }

    Ok(Labeling {
        width: w,
        labels,
        count,
    })
}

/// Find all connected components in a binary image
///
/// Returns one [`ConnectedComponent`] per foreground region, ordered by
/// label, i.e. by the raster position of each region's first pixel.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] if the image is not 1 bpp.
pub fn find_connected_components(
    pix: &Pix,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    let labeling = label_pixels(pix, connectivity)?;
    let n = labeling.count as usize;
    trace!(components = n, ?connectivity, "labelled mask");

    // (min_x, min_y, max_x, max_y, count) per label
    let mut stats = vec![(i32::MAX, i32::MAX, i32::MIN, i32::MIN, 0u32); n];
    for (i, &label) in labeling.labels.iter().enumerate() {
        if label == 0 {
            continue;
        }
        let x = (i % labeling.width) as i32;
        let y = (i / labeling.width) as i32;
        let s = &mut stats[label as usize - 1];
        s.0 = s.0.min(x);
        s.1 = s.1.min(y);
        s.2 = s.2.max(x);
        s.3 = s.3.max(y);
        s.4 += 1;
    }

    Ok(stats
        .into_iter()
        .enumerate()
        .map(|(i, (x0, y0, x1, y1, count))| {
            ConnectedComponent::new(
                i as u32 + 1,
                count,
                Box::from_corners(x0, y0, x1 + 1, y1 + 1),
            )
        })
        .collect())
}

/// Bounding boxes of all connected components, in label order
pub fn component_boxes(pix: &Pix, connectivity: ConnectivityType) -> RegionResult<Boxa> {
    Ok(find_connected_components(pix, connectivity)?
        .into_iter()
        .map(|c| c.bounds)
        .collect())
}

/// Label all connected components in a binary image
///
/// Returns a 32-bit image where each pixel holds the label of its
/// component (0 for background). Labels match
/// [`find_connected_components`].
pub fn label_connected_components(pix: &Pix, connectivity: ConnectivityType) -> RegionResult<Pix> {
    let labeling = label_pixels(pix, connectivity)?;
    let mut out = PixMut::new(pix.width(), pix.height(), PixelDepth::Bit32)?;
    for (i, &label) in labeling.labels.iter().enumerate() {
        if label != 0 {
            let x = (i % labeling.width) as u32;
            let y = (i / labeling.width) as u32;
            out.set_pixel_unchecked(x, y, label);
        }
    }
    Ok(out.into())
}
