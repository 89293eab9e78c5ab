//! # 整图变换模块
//!
//! 将通道编解码应用到整个像素网格：清除低位、写入常量颜色、还原隐藏内容，
//! 以及把一幅秘密图像按偏移量隐藏进底图。
//!
//! 所有函数都返回新的网格，输入保持不变。

use crate::grid::{Color, PixelGrid, Position};
use crate::steganography::{clear_low_bits, extract_low_bits, set_low_bits};
use log::debug;

/// 返回一份所有像素低 2 位均被清零的副本。
pub fn clear_all(grid: &PixelGrid) -> PixelGrid {
    grid.map(clear_low_bits)
}

/// 返回一份副本，其中每个像素的低 2 位都写入了 `color` 的最高 2 位。
pub fn embed_low_bits(grid: &PixelGrid, color: Color) -> PixelGrid {
    grid.map(|pixel| set_low_bits(pixel, color))
}

/// 还原隐藏在低位中的图像。
///
/// 每个通道只有 4 个亮度级别，结果是秘密图像的粗略版本，而非逐位还原。
pub fn reveal(grid: &PixelGrid) -> PixelGrid {
    grid.map(extract_low_bits)
}

/// 秘密图像能否在偏移 (0, 0) 处完整放入底图。
pub fn can_embed(base: &PixelGrid, secret: &PixelGrid) -> bool {
    secret.width() <= base.width() && secret.height() <= base.height()
}

/// 秘密图像在 (`row`, `col`) 偏移处是否完全落在底图之内。
pub fn fits_at(base: &PixelGrid, secret: &PixelGrid, row: usize, col: usize) -> bool {
    row.checked_add(secret.height())
        .is_some_and(|bottom| bottom <= base.height())
        && col
            .checked_add(secret.width())
            .is_some_and(|right| right <= base.width())
}

/// 将 `secret` 隐藏到 `base` 的 (`row_offset`, `col_offset`) 处，返回合成后的网格。
///
/// 落在底图之外的秘密像素会被直接跳过，因此允许只隐藏重叠的部分。
pub fn hide_image(
    base: &PixelGrid,
    secret: &PixelGrid,
    row_offset: usize,
    col_offset: usize,
) -> PixelGrid {
    let mut merged = base.clone();
    let mut skipped = 0usize;

    for (pos, secret_color) in secret.enumerate() {
        let target = row_offset
            .checked_add(pos.row)
            .zip(col_offset.checked_add(pos.col))
            .map(Position::from)
            .filter(|target| merged.contains(target.row, target.col));

        match target {
            Some(target) => merged[target] = set_low_bits(merged[target], secret_color),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(
            "{skipped} of {} secret pixels fell outside the {}x{} base and were skipped",
            secret.len(),
            base.height(),
            base.width()
        );
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_at_checks_both_edges() {
        let base = PixelGrid::new(10, 8);
        let secret = PixelGrid::new(4, 3);

        assert!(fits_at(&base, &secret, 5, 6));
        assert!(!fits_at(&base, &secret, 6, 6));
        assert!(!fits_at(&base, &secret, 5, 7));
        assert!(!fits_at(&base, &secret, usize::MAX, 0));
    }

    #[test]
    fn partial_overlap_only_touches_base_pixels() {
        let base = PixelGrid::filled(3, 3, Color::new(100, 100, 100));
        let secret = PixelGrid::filled(2, 2, Color::new(255, 255, 255));

        let merged = hide_image(&base, &secret, 2, 2);

        assert_eq!(merged.get(2, 2), Some(Color::new(103, 103, 103)));
        assert_eq!(merged.get(1, 1), Some(Color::new(100, 100, 100)));
        assert_eq!(merged.get(2, 1), Some(Color::new(100, 100, 100)));
    }
}
