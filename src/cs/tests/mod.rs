//! Unit tests for the coordinate system module

mod test_utils;
mod axis_direction_tests;
mod axis_tests;
mod coordinate_system_tests;
mod wkt_tests;
