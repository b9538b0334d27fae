pub mod logging;
#[cfg(test)]
pub mod test_utils;
pub mod wrap;
