//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::NAMED_COLORS;
use crate::grid::Color;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 的像素隐写工具：在图像每个通道的最低 2 位中隐藏图片或文本，并将其还原。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 的像素隐写工具：在图像每个通道的最低 2 位中隐藏图片或文本，并将其还原。\n结果请保存为无损格式 (如 PNG, BMP)，否则隐藏的数据会丢失。"
)]
pub struct Cli {
    /// 输出更详细的日志 (-v 为 debug，-vv 为 trace)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 清除图像中所有像素的最低 2 位。
    Clear(ImageArgs),

    /// 在每个像素的最低 2 位中写入同一种颜色。
    Tint(TintArgs),

    /// 将最低 2 位放大显示，还原隐藏的图像。
    Reveal(ImageArgs),

    /// 将一幅秘密图像隐藏到底图的指定位置。
    HideImage(HideImageArgs),

    /// 比较两幅图像，报告差异并可选地标出差异区域。
    Compare(CompareArgs),

    /// 在图像中隐藏一段仅由字母和空格组成的文本。
    HideText(HideTextArgs),

    /// 从图像中读取隐藏的文本。
    RevealText(RevealTextArgs),
}

/// 'clear' 与 'reveal' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ImageArgs {
    /// 输入图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 结果图像的输出路径，缺省时在输入图像旁生成。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(long)]
    pub force: bool,
}

/// 'tint' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct TintArgs {
    /// 输入图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要写入的颜色，可以是 `r,g,b` 或颜色名 (如 pink, blue)。
    #[arg(short, long, value_parser = parse_color)]
    pub color: Color,

    /// 结果图像的输出路径，缺省时在输入图像旁生成。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(long)]
    pub force: bool,
}

/// 'hide-image' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideImageArgs {
    /// 底图文件路径。
    #[arg(short, long)]
    pub base: PathBuf,

    /// 要隐藏的秘密图像文件路径。
    #[arg(short, long)]
    pub secret: PathBuf,

    /// 秘密图像左上角在底图中的行号。
    #[arg(long, default_value_t = 0)]
    pub row: usize,

    /// 秘密图像左上角在底图中的列号。
    #[arg(long, default_value_t = 0)]
    pub col: usize,

    /// 结果图像的输出路径，缺省时在底图旁生成。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(long)]
    pub force: bool,
}

/// 'compare' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// 第一幅图像，标出差异时以它为底。
    #[arg(short, long)]
    pub first: PathBuf,

    /// 第二幅图像。
    #[arg(short, long)]
    pub second: PathBuf,

    /// 若指定，则把标出差异区域的图像保存到此路径。
    #[arg(short, long)]
    pub outline: Option<PathBuf>,

    /// 差异区域边框的颜色。
    #[arg(short, long, value_parser = parse_color, default_value = "blue")]
    pub color: Color,

    /// 输出文件已存在时强制覆盖。
    #[arg(long)]
    pub force: bool,
}

/// 'hide-text' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideTextArgs {
    /// 用于隐写的输入图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 直接在命令行给出的消息。
    #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
    pub message: Option<String>,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 隐写完成后，保存结果图像的输出路径。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(long)]
    pub force: bool,
}

/// 'reveal-text' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RevealTextArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 若指定，则把恢复的文本保存到此路径，否则只打印到终端。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(long)]
    pub force: bool,
}

/// 解析 `r,g,b` 形式或颜色名形式的颜色参数。
pub fn parse_color(value: &str) -> Result<Color, String> {
    let value = value.trim();

    if let Some(&(_, color)) = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
    {
        return Ok(color);
    }

    let channels = value
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|e| format!("invalid channel value in '{value}': {e}"))?;

    match channels.as_slice() {
        &[red, green, blue] => Ok(Color::new(red, green, blue)),
        _ => {
            let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
            Err(format!(
                "expected 'r,g,b' or one of: {}",
                names.join(", ")
            ))
        }
    }
}
