pub mod cmm_attributes;
pub mod cmm_luminance;
pub mod cmm_primaries;
#[cfg(test)]
mod cmm_tests;
pub mod cmm_transfer_function;
