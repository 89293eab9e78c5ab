use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

use lsb_grid::{
    cli::{Cli, Commands},
    handler::{
        handle_clear, handle_compare, handle_hide_image, handle_hide_text, handle_reveal,
        handle_reveal_text, handle_tint,
    },
};

/// 初始化日志：默认只输出警告，`-v` 提升到 debug，`-vv` 提升到 trace。
/// 设置了 `RUST_LOG` 时以环境变量为准。
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// 程序的主入口点
///
/// 负责解析命令行参数、初始化日志，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Clear(args) => handle_clear(args),
        Commands::Tint(args) => handle_tint(args),
        Commands::Reveal(args) => handle_reveal(args),
        Commands::HideImage(args) => handle_hide_image(args),
        Commands::Compare(args) => handle_compare(args),
        Commands::HideText(args) => handle_hide_text(args),
        Commands::RevealText(args) => handle_reveal_text(args),
    }
}
