mod run;

pub use run::{RunOptions, run};
