use serde::{Deserialize, Serialize};

/// The three statutory codes the index is built from. Passages carrying any
/// other label are dropped at the partition boundary and never reach the
/// model.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceLabel {
	Bns,
	Bnss,
	Bsa,
	Unknown,
}

impl SourceLabel {
	/// Fixed rendering order for assembled context sections.
	pub const KNOWN: [Self; 3] = [Self::Bns, Self::Bnss, Self::Bsa];

	pub fn parse(raw: &str) -> Self {
		match raw {
			"BNS" => Self::Bns,
			"BNSS" => Self::Bnss,
			"BSA" => Self::Bsa,
			_ => Self::Unknown,
		}
	}

	pub fn code(self) -> &'static str {
		match self {
			Self::Bns => "BNS",
			Self::Bnss => "BNSS",
			Self::Bsa => "BSA",
			Self::Unknown => "UNKNOWN",
		}
	}

	/// Human-readable heading for the context block. `None` for unlabeled
	/// passages, which are never rendered.
	pub fn heading(self) -> Option<&'static str> {
		match self {
			Self::Bns => Some("BNS (Bharatiya Nyaya Sanhita - Substantive Criminal Law)"),
			Self::Bnss => Some("BNSS (Bharatiya Nagarik Suraksha Sanhita - Criminal Procedure)"),
			Self::Bsa => Some("BSA (Bharatiya Sakshya Adhiniyam - Evidence Law)"),
			Self::Unknown => None,
		}
	}
}
