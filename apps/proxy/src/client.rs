//! # 外部 API クライアント
//!
//! randomuser.me との通信を担当する。

pub mod random_user;

pub use random_user::{
    DEFAULT_TIMEOUT,
    RANDOM_USER_API_URL,
    RandomUserClient,
    RandomUserClientImpl,
    RandomUserError,
    UserEnvelope,
    UserRecord,
};
