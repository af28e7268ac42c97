mod flags;
mod parse;
mod run;

pub use flags::CliFlags;
pub use parse::parse;
pub use run::run;
