pub mod check;
pub mod clock;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod periods;
pub mod plan;
pub mod split;
pub mod status;
pub mod summary;
pub mod vacations;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database with the schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open_ready(cfg.database_path())
}
