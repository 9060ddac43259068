//! 日志系统设置

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 初始化日志系统
///
/// `verbose` 为真时在默认过滤规则下提升到 debug 级别，
/// 设置了 `RUST_LOG` 时以环境变量为准。
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            // 默认日志级别：debug模式下显示debug信息，release模式下显示info信息
            if verbose || cfg!(debug_assertions) {
                EnvFilter::new("parking_lottery=debug,warn")
            } else {
                EnvFilter::new("parking_lottery=info,warn")
            }
        });

    // 重复初始化时保持已有的订阅者
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
