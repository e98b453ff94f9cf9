//! Small helpers shared by pages.

pub mod load;
