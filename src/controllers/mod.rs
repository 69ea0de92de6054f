pub mod quote_controller;
pub mod zone_controller;
