//! Stateless converters between [`notebook_core::Notebook`] and textual
//! formats: the py-percent script format, the Starboard web-notebook
//! format (plain and HTML-embedded), and a human-readable outline.

pub mod outline;
pub mod percent;
pub mod prefix;
pub mod starboard;

pub use outline::outline;
pub use percent::{from_percent, to_percent};
pub use prefix::{decorate, BlockPrefixes};
pub use starboard::{to_starboard, to_starboard_html, STARBOARD_VERSION};
