pub mod rail_ext;
