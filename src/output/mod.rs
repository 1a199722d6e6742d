//! Report output
//!
//! - `tree`: directory tree of the selected paths
//! - `report`: header plus bucketed file contents

pub mod report;
pub mod tree;

pub use report::{format_thousands, render_report, Bucket, ReportHeader};
pub use tree::render_tree;
