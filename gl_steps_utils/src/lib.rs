mod options;
pub mod strings;

pub use options::OptExt;

#[cfg(test)]
mod tests;
