pub mod app;
pub mod controls_panel;
pub mod date_stamp;
pub mod side_input;
pub mod solution_area;
pub mod tile_ring;
