use std::fmt::Display;

/// Byte range of a piece of source text, `end` exclusive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SrcSpan {
    pub start: u32,
    pub end: u32,
}

impl SrcSpan {
	pub fn from(start: usize, end: usize) -> Self {
		Self { start: start as u32, end: end as u32 }
	}

	pub fn point(at: usize) -> Self {
		Self::from(at, at)
	}
}

impl Display for SrcSpan {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}..{}", self.start, self.end)
	}
}
