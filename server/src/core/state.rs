use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::booking::BookingManager;
use crate::core::Config;
use crate::core::error::{Result, ServerError};
use crate::db::DbService;
use crate::services::PaymentService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | booking | Arc<BookingManager> | 预订引擎 |
/// | payments | PaymentService | 支付服务代理 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 预订引擎 (Arc 共享所有权，持有桌台锁表)
    pub booking: Arc<BookingManager>,
    /// 支付服务代理
    pub payments: PaymentService,
}

impl ServerState {
    /// 创建服务器状态 (手动构造，测试常用)
    ///
    /// 通常使用 [`ServerState::initialize()`] 方法代替
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let booking = Arc::new(BookingManager::new(
            db.clone(),
            config.reservation_duration_hours,
        ));
        let payments = PaymentService::new(config.payment_service_url.clone());
        Self {
            config,
            db,
            booking,
            payments,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/restman.db)
    /// 3. 各服务 (BookingManager, PaymentService)
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("restman.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
