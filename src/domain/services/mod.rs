mod prompt_builder;
mod response_extractor;

pub use prompt_builder::*;
pub use response_extractor::*;
