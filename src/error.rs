//! 隐写核心的错误类型。
//!
//! 图像尺寸不匹配、隐藏图像越界等情况按约定以返回值表达，不属于错误；
//! 这里只覆盖文本编解码与容量检查的失败情形。

use std::fmt;

/// 文本隐写过程中可能出现的错误。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 文本中含有字母表 (A-Z 与空格) 之外的字符。
    InvalidCharacter { character: char, index: usize },
    /// 负载中出现了无法解码的值 (不在 1..=27 之内)。
    InvalidCode { value: u8, index: usize },
    /// 消息加上结束标记所需的像素数超过了网格容量。
    CapacityExceeded { required: usize, available: usize },
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(
                f,
                "unsupported character {character:?} at index {index}; only letters A-Z and spaces can be hidden"
            ),
            Self::InvalidCode { value, index } => {
                write!(f, "invalid payload value {value} at index {index}")
            }
            Self::CapacityExceeded {
                required,
                available,
            } => write!(
                f,
                "message needs {required} pixels but the image only has {available}"
            ),
        }
    }
}

impl std::error::Error for StegoError {}
