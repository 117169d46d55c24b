pub mod constants;
pub mod repository;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod memory;
#[cfg(test)]
pub mod test_helpers;
