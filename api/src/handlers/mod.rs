pub mod error;

pub use error::{error_response, see_other, FormPage};
