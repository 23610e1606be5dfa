//! Reading the OSPF description file.

mod description;

pub use description::{parse_description, read_description_file, validate};
