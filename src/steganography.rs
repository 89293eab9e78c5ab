use crate::constants::{BIT_PAIR_MASK, BITS_PER_CHANNEL, CHANNEL_SCALE, LOW_BITS_MASK, PAIRS_PER_CODE};
use crate::grid::Color;

/// 将每个通道的最低 2 位清零。
pub fn clear_low_bits(color: Color) -> Color {
    color.map(|channel| channel & LOW_BITS_MASK)
}

/// 保留 `color` 每个通道的高 6 位，并把 `source` 对应通道的最高 2 位写入低 2 位。
pub fn set_low_bits(color: Color, source: Color) -> Color {
    color.zip_map(source, |channel, src| (channel & LOW_BITS_MASK) | (src / CHANNEL_SCALE))
}

/// 取出每个通道的最低 2 位并放大到 0..=255，得到隐藏图像的粗略还原。
pub fn extract_low_bits(color: Color) -> Color {
    color.map(|channel| (channel & BIT_PAIR_MASK) * CHANNEL_SCALE)
}

pub fn pack_bit_pairs(mut value: u32, channels: &mut [u8]) {
    for byte in channels.iter_mut() {
        *byte = ((value & BIT_PAIR_MASK as u32) as u8) | (*byte & LOW_BITS_MASK);
        value >>= BITS_PER_CHANNEL;
    }
}

pub fn unpack_bit_pairs(channels: &[u8]) -> u32 {
    channels
        .iter()
        .enumerate()
        .fold(0, |acc, (i, &byte)| {
            acc | (((byte & BIT_PAIR_MASK) as u32) << (i as u32 * BITS_PER_CHANNEL))
        })
}

/// 将 `value` 按 4 进制分解为三个数位，最低位在前。
pub fn bit_pairs(value: u8) -> [u8; PAIRS_PER_CODE] {
    let mut channels = [0u8; PAIRS_PER_CODE];
    pack_bit_pairs(value as u32, &mut channels);
    channels
}

/// 把一个文本编码写入像素的 R、G、B 低位 (R 为最低的 4 进制数位)。
pub fn embed_code(color: Color, code: u8) -> Color {
    let mut channels = color.channels();
    pack_bit_pairs(code as u32, &mut channels);
    Color::from_channels(channels)
}

pub fn extract_code(color: Color) -> u8 {
    unpack_bit_pairs(&color.channels()) as u8
}
