//! # lsb_grid 库
//!
//! 本库包含基于像素网格的 LSB 隐写核心逻辑：
//! 在每个颜色通道的最低 2 位中隐藏整幅图像或一段文本，并将其还原，
//! 同时提供用于校验结果的比较与差异检测。

// 声明库包含的所有模块。

pub mod cli;
pub mod compare;
pub mod constants;
pub mod error;
pub mod grid;
pub mod handler;
pub mod steganography;
pub mod text;
pub mod transform;

pub use error::StegoError;
pub use grid::{Color, PixelGrid, Position};
