mod forms;
mod requests;

pub use forms::*;
pub use requests::*;
