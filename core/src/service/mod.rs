pub mod dimension_service;
pub mod rotation_service;
pub mod spot_service;
