pub mod metadata;
pub mod record;
pub mod report;
pub mod rotation;
pub mod spot;
