pub mod check;
pub mod example;
pub mod format;
