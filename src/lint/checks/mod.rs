//! Individual lint checks, one module per configuration section

pub mod flow;
pub mod quality;
pub mod references;
