pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod flavors;
pub mod history;
pub mod init;
pub mod log;
pub mod stock;
pub mod taste;
