use clap::Parser;
use parking_lottery::app::logging::setup::init_logging;
use parking_lottery::cli::{self, Args};

fn main() {
    // 解析命令行参数
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = cli::run(args.command) {
        tracing::error!("{}", e);
        eprintln!("错误: {e}");
        std::process::exit(1);
    }
}
