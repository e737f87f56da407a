pub mod commands;
pub mod config;
pub mod manifest;

#[cfg(test)]
pub mod test_helpers;
