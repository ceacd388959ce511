pub mod colour_map;
pub mod lane_algorithm;
