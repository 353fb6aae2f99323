//! Host permission implementations.

mod allow_list;

pub use allow_list::OriginAllowList;
