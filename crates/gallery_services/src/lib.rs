mod report;
mod validation;

#[cfg(test)]
mod test_utils;

pub use report::*;
pub use validation::*;
