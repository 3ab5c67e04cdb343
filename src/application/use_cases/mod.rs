mod analyze_text;

pub use analyze_text::*;
