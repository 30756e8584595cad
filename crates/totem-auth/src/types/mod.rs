/*
[INPUT]:  Protocol schema definitions and serde requirements
[OUTPUT]: Shared enums and result records
[POS]:    Data layer - type definitions shared across modules
[UPDATE]: When error codes or supported chains change
*/

pub mod enums;
pub mod models;

pub use enums::*;
pub use models::*;
