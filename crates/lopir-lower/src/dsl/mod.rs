//! Plan-description front doors.

pub mod yaml;
