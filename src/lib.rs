//! lanshare — serve a directory over HTTP for quick LAN file sharing.
//!
//! Directories render as browsable HTML listings; files stream with
//! `ETag`-based conditional GET support.

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
