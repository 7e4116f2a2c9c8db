#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod charset;
mod config;
mod error;
mod generator;
mod mutex;
mod partition;
mod status;

pub use crate::charset::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::partition::*;
pub use crate::status::*;
