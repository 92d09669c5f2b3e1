pub mod commitment;
pub mod protocol;
