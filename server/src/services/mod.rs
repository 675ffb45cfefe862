//! 服务模块
//!
//! - [`PaymentService`] - 外部支付服务代理

pub mod payment;

pub use payment::{Payment, PaymentCreate, PaymentError, PaymentService};
