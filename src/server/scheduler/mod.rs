//! Cron jobs: scheduled imports and password reset cleanup.

pub mod imports;
