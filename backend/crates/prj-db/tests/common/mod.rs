#![allow(dead_code)]

mod test_db;

pub use fixtures::*;
pub use test_db::*;
