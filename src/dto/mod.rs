pub mod quote_dto;
pub mod response_dto;
pub mod tariff_dto;
pub mod zone_dto;

pub use response_dto::ApiResponse;
