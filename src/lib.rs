//! Interactive node-link graph demos: a directly built random graph and a
//! viewer that derives its graph from `"nodeN to nodeM"` edge names.

pub mod app;
pub mod config;
pub mod logging;
pub mod model;
mod util;
