//! # 图像比较模块
//!
//! 判断两个网格是否相同、找出所有不同的像素，并计算差异区域的外接矩形。
//! 尺寸不同的网格按约定视为“不相同”且“没有可比较的差异”，不会返回错误。

use crate::grid::{Color, PixelGrid, Position};

/// 差异区域的外接矩形，四条边均包含在内。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl BoundingBox {
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    fn include(self, pos: Position) -> Self {
        Self {
            top: self.top.min(pos.row),
            left: self.left.min(pos.col),
            bottom: self.bottom.max(pos.row),
            right: self.right.max(pos.col),
        }
    }

    /// 矩形边框上的全部坐标。
    fn outline(&self) -> impl Iterator<Item = Position> + '_ {
        let horizontal = (self.left..=self.right)
            .flat_map(move |col| [Position::new(self.top, col), Position::new(self.bottom, col)]);
        let vertical = (self.top..=self.bottom)
            .flat_map(move |row| [Position::new(row, self.left), Position::new(row, self.right)]);
        horizontal.chain(vertical)
    }
}

/// 两个网格尺寸相同且每个像素颜色都相同时返回 `true`。
pub fn equals(first: &PixelGrid, second: &PixelGrid) -> bool {
    first.same_dimensions(second) && first.pixels() == second.pixels()
}

/// 按行优先顺序返回所有颜色不同的坐标。尺寸不同时返回空集合。
pub fn diff(first: &PixelGrid, second: &PixelGrid) -> Vec<Position> {
    if !first.same_dimensions(second) {
        return Vec::new();
    }

    first
        .enumerate()
        .zip(second.pixels())
        .filter(|((_, a), b)| a != *b)
        .map(|((pos, _), _)| pos)
        .collect()
}

/// 计算差异坐标的外接矩形，集合为空时返回 `None`。
pub fn bounding_box(diffs: &[Position]) -> Option<BoundingBox> {
    let (&first, rest) = diffs.split_first()?;
    let seed = BoundingBox {
        top: first.row,
        left: first.col,
        bottom: first.row,
        right: first.col,
    };
    Some(rest.iter().fold(seed, |bbox, &pos| bbox.include(pos)))
}

/// 返回一份副本，并用 `color` 画出差异区域外接矩形的边框。
///
/// `diffs` 为空时返回未修改的副本。
pub fn highlight(grid: &PixelGrid, diffs: &[Position], color: Color) -> PixelGrid {
    let mut highlighted = grid.clone();
    if let Some(bbox) = bounding_box(diffs) {
        for pos in bbox.outline() {
            highlighted.set(pos.row, pos.col, color);
        }
    }
    highlighted
}
