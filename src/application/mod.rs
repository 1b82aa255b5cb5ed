pub mod scanner;

pub use scanner::{BoostScanner, ScanError, ScannerOptions};
