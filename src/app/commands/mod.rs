pub mod deploy;
pub mod generate;
pub mod preview;
pub mod sections;
