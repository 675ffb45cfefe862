//! Restman Server - 餐厅运营后端
//!
//! # 架构概述
//!
//! 本模块是 Restman 后端的主入口，提供以下核心功能：
//!
//! - **预订引擎** (`booking`): 桌台时间窗分配，保证同桌不重叠
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **HTTP API** (`api`): RESTful API 接口
//! - **支付代理** (`services/payment`): 转发外部支付服务
//!
//! # 模块结构
//!
//! ```text
//! server/src/
//! ├── core/          # 配置、状态、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── booking/       # 预订引擎 (冲突检测、校验、桌台锁)
//! ├── services/      # 支付服务代理
//! ├── utils/         # 工具函数
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::booking::{BookingError, BookingManager, ValidationErrorKind};
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志)
///
/// 必须在读取 [`Config`] 之前调用
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

/// 打印启动横幅
pub fn print_banner() {
    println!(
        r#"
  ____           _
 |  _ \ ___  ___| |_ _ __ ___   __ _ _ __
 | |_) / _ \/ __| __| '_ ` _ \ / _` | '_ \
 |  _ <  __/\__ \ |_| | | | | | (_| | | | |
 |_| \_\___||___/\__|_| |_| |_|\__,_|_| |_|

 Restaurant Operations Backend v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
