//! Output of the summarized networks.
//!
//! - [`fortigate`] - Fortigate OSPF configuration
//! - [`report`] - Summarization report, terminal and JSON

mod fortigate;
mod report;

pub use fortigate::{ip_to_netmask, render_fortigate, write_config};
pub use report::SummaryReport;
