//! # 文本隐写模块
//!
//! 字母表编码：空格为 27，A..=Z 为 1..=26，结束标记为 0。
//! 每个编码按 4 进制分解为三个 2 位数位，写入一个像素的 R、G、B 低位，
//! 像素按行优先顺序依次使用。

use crate::constants::{FIRST_LETTER_CODE, SPACE_CODE, TERMINATOR};
use crate::error::StegoError;
use crate::grid::PixelGrid;
use crate::steganography::{embed_code, extract_code};
use log::{debug, trace};

/// 网格最多能隐藏的字符数 (需为结束标记保留一个像素)。
pub fn text_capacity(grid: &PixelGrid) -> usize {
    grid.len().saturating_sub(1)
}

/// 将文本编码为负载，并在末尾追加结束标记 0。
///
/// 小写字母会先转换为大写。
///
/// # Errors
///
/// 遇到字母与空格之外的字符时返回 [`StegoError::InvalidCharacter`]。
pub fn encode(text: &str) -> Result<Vec<u8>, StegoError> {
    let mut codes = text
        .chars()
        .enumerate()
        .map(|(index, character)| match character.to_ascii_uppercase() {
            ' ' => Ok(SPACE_CODE),
            letter @ 'A'..='Z' => Ok(letter as u8 - b'A' + FIRST_LETTER_CODE),
            _ => Err(StegoError::InvalidCharacter { character, index }),
        })
        .collect::<Result<Vec<u8>, StegoError>>()?;

    codes.push(TERMINATOR);
    Ok(codes)
}

/// 将负载解码为文本。负载中不应包含结束标记。
///
/// # Errors
///
/// 任何不在 1..=27 之内的值都会返回 [`StegoError::InvalidCode`]。
pub fn decode(codes: &[u8]) -> Result<String, StegoError> {
    codes
        .iter()
        .enumerate()
        .map(|(index, &value)| match value {
            SPACE_CODE => Ok(' '),
            1..=26 => Ok((b'A' + value - FIRST_LETTER_CODE) as char),
            _ => Err(StegoError::InvalidCode { value, index }),
        })
        .collect()
}

/// 将 `text` 隐藏到网格中，直接修改传入的网格。
///
/// 需要保留原图的调用者应先克隆。容量检查在写入任何像素之前完成，
/// 失败时网格保持不变。
///
/// # Errors
///
/// * 文本含有不支持的字符时返回 [`StegoError::InvalidCharacter`]。
/// * 文本加结束标记超过像素数时返回 [`StegoError::CapacityExceeded`]。
pub fn hide_text(grid: &mut PixelGrid, text: &str) -> Result<(), StegoError> {
    let codes = encode(text)?;

    if codes.len() > grid.len() {
        return Err(StegoError::CapacityExceeded {
            required: codes.len(),
            available: grid.len(),
        });
    }

    for (pixel, &code) in grid.pixels_mut().iter_mut().zip(&codes) {
        *pixel = embed_code(*pixel, code);
    }

    debug!(
        "hid {} codes in a {}x{} grid",
        codes.len(),
        grid.height(),
        grid.width()
    );
    Ok(())
}

/// 按行优先顺序读取隐藏的文本，遇到结束标记即停止。
///
/// 若读完整个网格都没有遇到结束标记，则解码已经读到的全部内容。
///
/// # Errors
///
/// 读到的值无法解码时返回 [`StegoError::InvalidCode`]，
/// 这通常意味着图像中并没有隐藏文本。
pub fn reveal_text(grid: &PixelGrid) -> Result<String, StegoError> {
    let codes: Vec<u8> = grid
        .pixels()
        .iter()
        .map(|&pixel| extract_code(pixel))
        .take_while(|&code| code != TERMINATOR)
        .collect();

    if codes.len() == grid.len() {
        trace!("no terminator found, decoding all {} pixels", codes.len());
    }

    decode(&codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_maps_alphabet_and_terminates() {
        assert_eq!(encode("Az b").unwrap(), vec![1, 26, 27, 2, 0]);
        assert_eq!(encode("").unwrap(), vec![0]);
    }

    #[test]
    fn encode_rejects_digits_with_position() {
        assert_eq!(
            encode("AB3").unwrap_err(),
            StegoError::InvalidCharacter {
                character: '3',
                index: 2
            }
        );
    }

    #[test]
    fn decode_rejects_terminator_and_large_values() {
        assert_eq!(
            decode(&[8, 0, 9]).unwrap_err(),
            StegoError::InvalidCode { value: 0, index: 1 }
        );
        assert!(decode(&[28]).is_err());
    }

    #[test]
    fn capacity_reserves_terminator() {
        assert_eq!(text_capacity(&PixelGrid::new(4, 4)), 15);
        assert_eq!(text_capacity(&PixelGrid::new(0, 0)), 0);
    }
}
