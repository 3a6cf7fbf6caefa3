pub use xshell::{Shell, cmd};

pub use crate::section::Section;
pub use crate::{CARGO, is_verbose};
