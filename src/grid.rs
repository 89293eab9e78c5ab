//! # 像素网格模块
//!
//! 定义隐写算法操作的数据模型：不可变的 [`Color`] 三元组、坐标 [`Position`]
//! 以及按行优先顺序存储像素的 [`PixelGrid`]。
//!
//! 像素是值类型：通过 [`PixelGrid::get`] 读取，修改后再用 [`PixelGrid::set`]
//! 或 `grid[pos] = color` 写回。网格不会向外暴露可共享的可变像素句柄，
//! 克隆得到的网格与原网格完全独立。

use image::{DynamicImage, Rgb, RgbImage};
use std::ops::{Index, IndexMut};

/// 一个 RGB 颜色值，每个通道取值 0..=255。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// 按 R、G、B 顺序返回三个通道。
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub const fn from_channels(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    /// 对每个通道分别应用 `f`。
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::from_channels(self.channels().map(f))
    }

    /// 将本颜色与 `other` 的对应通道两两组合。
    pub fn zip_map(self, other: Color, f: impl Fn(u8, u8) -> u8) -> Self {
        Self::new(
            f(self.red, other.red),
            f(self.green, other.green),
            f(self.blue, other.blue),
        )
    }
}

impl From<Rgb<u8>> for Color {
    fn from(Rgb(channels): Rgb<u8>) -> Self {
        Self::from_channels(channels)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.channels())
    }
}

/// 网格中的坐标，`row` 为行号 (y)，`col` 为列号 (x)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// 固定尺寸的二维像素网格，内部按行优先顺序存储。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// 创建一个全黑的网格。
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::default())
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// 按行优先顺序对每个坐标调用 `f` 来构造网格。
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Position) -> Color) -> Self {
        let pixels = (0..height)
            .flat_map(|row| (0..width).map(move |col| Position::new(row, col)))
            .map(&mut f)
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// 像素总数 (`width * height`)。
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn same_dimensions(&self, other: &PixelGrid) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.width + col)
    }

    /// 读取 (row, col) 处的颜色，越界时返回 `None`。
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.offset(row, col).map(|i| self.pixels[i])
    }

    /// 将 (row, col) 处的颜色设置为 `color`。
    ///
    /// 坐标越界时不做任何修改并返回 `false`。
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> bool {
        match self.offset(row, col) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// 按行优先顺序排列的全部像素。
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// 按行优先顺序遍历每个像素及其坐标。
    pub fn enumerate(&self) -> impl Iterator<Item = (Position, Color)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &color)| (Position::new(i / self.width, i % self.width), color))
    }

    /// 对每个像素应用 `f`，返回新的网格，原网格保持不变。
    pub fn map(&self, f: impl Fn(Color) -> Color) -> PixelGrid {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&color| f(color)).collect(),
        }
    }

    /// 转换为 `image` crate 的 RGB 缓冲区，以便编码保存。
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self[Position::new(y as usize, x as usize)].into()
        })
    }
}

impl Index<Position> for PixelGrid {
    type Output = Color;

    fn index(&self, pos: Position) -> &Color {
        assert!(
            self.contains(pos.row, pos.col),
            "position ({}, {}) is outside a {}x{} grid",
            pos.row,
            pos.col,
            self.height,
            self.width
        );
        &self.pixels[pos.row * self.width + pos.col]
    }
}

impl IndexMut<Position> for PixelGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Color {
        assert!(
            self.contains(pos.row, pos.col),
            "position ({}, {}) is outside a {}x{} grid",
            pos.row,
            pos.col,
            self.height,
            self.width
        );
        &mut self.pixels[pos.row * self.width + pos.col]
    }
}

impl From<&RgbImage> for PixelGrid {
    fn from(image: &RgbImage) -> Self {
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            pixels: image.pixels().map(|&pixel| Color::from(pixel)).collect(),
        }
    }
}

/// 带 alpha 通道的图像会被展平为 RGB，alpha 信息不会保留。
impl From<&DynamicImage> for PixelGrid {
    fn from(image: &DynamicImage) -> Self {
        Self::from(&image.to_rgb8())
    }
}
