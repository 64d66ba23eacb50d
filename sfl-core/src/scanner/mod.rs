pub mod error;
pub mod token;
pub mod scanner;

pub mod prelude {
	pub use super::{
		error::*,
		token::*,
		scanner::*
	};
}
