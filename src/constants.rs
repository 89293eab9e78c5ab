use crate::grid::Color;

/// 清除通道最低 2 位所用的掩码。
/// 保留高 6 位，低 2 位用于承载隐藏数据。
pub const LOW_BITS_MASK: u8 = 0xFC;

/// 取出通道最低 2 位所用的掩码。
pub const BIT_PAIR_MASK: u8 = 0x03;

/// 每个通道承载的隐藏位数。
pub const BITS_PER_CHANNEL: u32 = 2;

/// 通道值与 2 位字段之间的缩放因子。
/// 源通道除以 64 得到其最高 2 位 (0..=3)，恢复时再乘以 64 放大回 0..=255。
pub const CHANNEL_SCALE: u8 = 64;

/// 文本负载的结束标记。
pub const TERMINATOR: u8 = 0;

/// 空格在文本负载中的编码。
pub const SPACE_CODE: u8 = 27;

/// 字母 'A' 的编码，'Z' 为 `FIRST_LETTER_CODE + 25`。
pub const FIRST_LETTER_CODE: u8 = 1;

/// 每个文本编码写入一个像素，占用 R、G、B 三个通道。
/// 3 个 2 位字段共 6 bits，足以覆盖 0..=27。
pub const PAIRS_PER_CODE: usize = 3;

/// 命令行中可以直接按名称使用的颜色。
pub const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::new(0, 0, 0)),
    ("white", Color::new(255, 255, 255)),
    ("red", Color::new(255, 0, 0)),
    ("green", Color::new(0, 255, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("yellow", Color::new(255, 255, 0)),
    ("cyan", Color::new(0, 255, 255)),
    ("magenta", Color::new(255, 0, 255)),
    ("orange", Color::new(255, 200, 0)),
    ("pink", Color::new(255, 175, 175)),
    ("gray", Color::new(128, 128, 128)),
];
