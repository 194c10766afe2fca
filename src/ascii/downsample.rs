//! Block-averaging downsampling from pixels to character cells.

use crate::image::BrightnessGrid;

/// Integer block size along one axis: `source / target`, at least 1.
///
/// A target larger than the source would give zero-sized blocks, so the
/// block size is clamped to one pixel and the output is truncated at the
/// source edge instead.
pub fn block_size(source: usize, target: usize) -> usize {
    let scale = source / target.max(1);
    if scale == 0 {
        log::debug!(
            "target size {} exceeds source size {}, using 1-pixel blocks",
            target,
            source
        );
    }
    scale.max(1)
}

/// Downsample a grid to at most `char_width` x `char_height` mean brightness values.
///
/// Blocks of `scale_y` rows by `scale_x` columns start at every multiple of
/// the block size. Blocks at the right and bottom edges are clipped to the
/// grid. Rows and columns beyond the target size are dropped, so remainder
/// pixels of a non-multiple source size are truncated.
///
/// # Returns
/// Rows of block means, top to bottom. Row count is at most `char_height`
/// and each row has at most `char_width` entries.
///
/// # Example
/// ```
/// use intensity_lab::ascii::downsample;
/// use intensity_lab::image::BrightnessGrid;
///
/// let img = BrightnessGrid::from_vec(4, 2, vec![0, 100, 200, 200, 0, 100, 200, 200]).unwrap();
/// let means = downsample(&img, 2, 1);
/// assert_eq!(means, vec![vec![50.0, 200.0]]);
/// ```
pub fn downsample(img: &BrightnessGrid, char_width: usize, char_height: usize) -> Vec<Vec<f64>> {
    let (img_height, img_width) = img.shape();
    let scale_x = block_size(img_width, char_width);
    let scale_y = block_size(img_height, char_height);

    let mut result = Vec::with_capacity(char_height.min(img_height));

    for y in (0..img_height).step_by(scale_y).take(char_height) {
        let end_y = (y + scale_y).min(img_height);
        let mut row = Vec::with_capacity(char_width.min(img_width));

        for x in (0..img_width).step_by(scale_x).take(char_width) {
            let end_x = (x + scale_x).min(img_width);

            // Average brightness of all pixels in this block
            let mut sum = 0u64;
            for py in y..end_y {
                sum += img.row(py)[x..end_x].iter().map(|&v| u64::from(v)).sum::<u64>();
            }
            let count = ((end_y - y) * (end_x - x)) as f64;

            row.push(sum as f64 / count);
        }

        result.push(row);
    }

    result
}
