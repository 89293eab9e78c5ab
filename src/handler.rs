//! # 命令处理逻辑模块
//!
//! 包含处理各个子命令的高级业务逻辑。
//! 本模块负责协调图像与文本文件的读写、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CompareArgs, HideImageArgs, HideTextArgs, ImageArgs, RevealTextArgs, TintArgs};
use crate::compare::{bounding_box, diff, equals, highlight};
use crate::grid::PixelGrid;
use crate::text::{hide_text, reveal_text, text_capacity};
use crate::transform::{can_embed, clear_all, embed_low_bits, fits_at, hide_image, reveal};
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Clear' 命令：清除所有像素的最低 2 位。
pub fn handle_clear(args: ImageArgs) -> Result<()> {
    let dest = resolve_dest(args.dest, &args.image, "doctored", "png");
    ensure_writable(&dest, args.force)?;

    let grid = load_grid(&args.image)?;
    save_grid(&clear_all(&grid), &dest)?;

    println!(
        "The low bits have been cleared and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Tint' 命令：在每个像素的低位中写入同一种颜色。
pub fn handle_tint(args: TintArgs) -> Result<()> {
    let dest = resolve_dest(args.dest, &args.image, "doctored", "png");
    ensure_writable(&dest, args.force)?;

    let grid = load_grid(&args.image)?;
    save_grid(&embed_low_bits(&grid, args.color), &dest)?;

    println!(
        "The color ({}, {}, {}) has been hidden and saved: {}",
        args.color.red,
        args.color.green,
        args.color.blue,
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Reveal' 命令：放大最低 2 位，还原隐藏的图像。
pub fn handle_reveal(args: ImageArgs) -> Result<()> {
    let dest = resolve_dest(args.dest, &args.image, "revealed", "png");
    ensure_writable(&dest, args.force)?;

    let grid = load_grid(&args.image)?;
    save_grid(&reveal(&grid), &dest)?;

    println!(
        "The hidden picture has been revealed and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'HideImage' 命令的执行逻辑。
///
/// 秘密图像超出底图的部分会被跳过，此时只向用户发出警告，不会报错。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取底图或秘密图像。
/// * 无法写入结果图像。
pub fn handle_hide_image(args: HideImageArgs) -> Result<()> {
    let dest = resolve_dest(args.dest, &args.base, "doctored", "png");
    ensure_writable(&dest, args.force)?;

    let base = load_grid(&args.base)?;
    let secret = load_grid(&args.secret)?;

    println!(
        "Can the secret fit inside the base picture?: {}",
        yes_no(can_embed(&base, &secret))
    );

    if !fits_at(&base, &secret, args.row, args.col) {
        warn!(
            "secret {}x{} at ({}, {}) extends past the {}x{} base",
            secret.height(),
            secret.width(),
            args.row,
            args.col,
            base.height(),
            base.width()
        );
        println!(
            "{}",
            "The secret picture extends past the base; only the overlapping part will be hidden."
                .yellow()
        );
    }

    let merged = hide_image(&base, &secret, args.row, args.col);
    save_grid(&merged, &dest)?;

    println!(
        "The secret picture has been hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Compare' 命令的执行逻辑。
///
/// 报告两幅图像是否相同、差异像素的数量以及差异区域的外接矩形；
/// 若给出了 `outline` 路径，则以第一幅图像为底画出差异区域并保存。
pub fn handle_compare(args: CompareArgs) -> Result<()> {
    if let Some(outline) = &args.outline {
        ensure_writable(outline, args.force)?;
    }

    let first = load_grid(&args.first)?;
    let second = load_grid(&args.second)?;

    if !first.same_dimensions(&second) {
        println!(
            "{}",
            "The pictures have different dimensions; no pixels can be compared.".yellow()
        );
    }

    let diffs = diff(&first, &second);
    println!(
        "Are the pictures the same?: {}",
        yes_no(equals(&first, &second))
    );
    println!(
        "Number of differing pixels: {}",
        diffs.len().to_string().bold()
    );

    match bounding_box(&diffs) {
        Some(bbox) => println!(
            "Differences span rows {}-{} and columns {}-{}",
            bbox.top.to_string().red().bold(),
            bbox.bottom.to_string().red().bold(),
            bbox.left.to_string().red().bold(),
            bbox.right.to_string().red().bold()
        ),
        None => debug!("no differences to outline"),
    }

    if let Some(outline) = &args.outline {
        save_grid(&highlight(&first, &diffs, args.color), outline)?;
        println!(
            "The outlined picture has been saved: {}",
            outline.to_string_lossy().green().bold()
        );
    }

    Ok(())
}

/// 处理 'HideText' 命令的执行逻辑。
///
/// 负责读取图像和消息、检查隐写空间是否足够、调用文本隐写函数，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与消息来源的 `HideTextArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取输入的图像或文本文件。
/// * 消息中含有字母与空格之外的字符。
/// * 图像没有足够的像素来隐藏消息。
/// * 无法写入到目标图像文件。
pub fn handle_hide_text(args: HideTextArgs) -> Result<()> {
    let dest = resolve_dest(args.dest, &args.image, "doctored", "png");
    ensure_writable(&dest, args.force)?;

    let message = match (args.message, &args.text) {
        (Some(message), _) => message,
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| {
                format!(
                    "Unable to read text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?
            .trim_end_matches(['\r', '\n'])
            .to_string(),
        (None, None) => anyhow::bail!("Either a message or a text file must be given."),
    };

    let mut grid = load_grid(&args.image)?;
    let available = text_capacity(&grid);

    anyhow::ensure!(
        message.chars().count() <= available,
        "Not enough space in the image to hide the text. \nRequired: {}, Available: {}",
        message.chars().count().to_string().red().bold(),
        available.to_string().green().bold()
    );

    hide_text(&mut grid, &message).with_context(|| {
        format!(
            "Failed to hide the message in {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    save_grid(&grid, &dest)?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'RevealText' 命令的执行逻辑。
///
/// 恢复的文本总会打印到终端；若给出了 `text` 路径，还会写入该文件。
pub fn handle_reveal_text(args: RevealTextArgs) -> Result<()> {
    if let Some(path) = &args.text {
        ensure_writable(path, args.force)?;
    }

    let grid = load_grid(&args.image)?;
    let text = reveal_text(&grid).with_context(|| {
        format!(
            "Failed to recover a message from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!("Message that's revealed: {}", text.cyan().bold());

    if let Some(path) = &args.text {
        fs::write(path, &text).with_context(|| {
            format!(
                "Unable to write to target text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?;
        println!(
            "The text has been successfully recovered and saved: {}",
            path.to_string_lossy().green().bold()
        );
    }

    Ok(())
}

/// 读取图像文件并转换为像素网格。
fn load_grid(path: &Path) -> Result<PixelGrid> {
    let image = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let grid = PixelGrid::from(&image);
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

fn save_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    grid.to_image().save(path).with_context(|| {
        format!(
            "Unable to write to target image file: {}. \nUse a lossless format such as PNG or BMP.",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 未指定输出路径时，在输入文件旁生成 `<prefix>_<stem>.<ext>`。
fn resolve_dest(dest: Option<PathBuf>, input: &Path, prefix: &str, extension: &str) -> PathBuf {
    dest.unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        input.with_file_name(format!("{prefix}_{stem}.{extension}"))
    })
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn yes_no(value: bool) -> colored::ColoredString {
    if value {
        "yes".green().bold()
    } else {
        "no".red().bold()
    }
}
