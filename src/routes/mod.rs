pub mod quote_routes;
pub mod zone_routes;
