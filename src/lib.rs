//! fontseek: recursive font discovery and lightweight metadata inspection.
//!
//! This crate is the filesystem-facing half of a font picker: it finds font
//! files and answers the questions a picker UI asks about each one (family,
//! style, weight, which scripts it can render). It deliberately knows nothing
//! about rendering; parsing is delegated to read-fonts/skrifa.
//!
//! Two pieces, loosely coupled:
//!
//! - **Discovery** walks a directory tree depth-first, follows symlinks, and
//!   survives symlink cycles by canonicalizing every directory before descent
//!   and visiting each real directory at most once. Unreadable entries are
//!   logged and skipped, so a single bad permission bit never hides an entire
//!   font library.
//! - **Inspection** opens each discovered file and assembles a
//!   [`FontFaceInfo`]: name-table strings, fvar named instances, a derived
//!   weight/style pair, and script-coverage flags probed from the character
//!   map (Cyrillic, Japanese, Korean, Chinese).
//!
//! ```rust,no_run
//! let faces = fontseek::scan("/usr/share/fonts");
//! for face in &faces {
//!     println!(
//!         "{} {} ({})",
//!         face.family_name.as_deref().unwrap_or("<unnamed>"),
//!         face.weight,
//!         face.path.display(),
//!     );
//! }
//! ```
//!
//! Neither entry point returns errors: discovery yields a possibly-partial
//! path list and inspection yields `None` for files it cannot parse, with
//! diagnostics going through the `log` facade. Hosts that want them should
//! install a logger; the crate never does.

pub mod discovery;
pub mod inspect;
pub mod output;
pub mod scripts;
pub mod style;

use std::path::Path;

pub use discovery::{locate, FONT_EXTENSIONS};
pub use inspect::{inspect, inspect_all, FontFaceInfo, NamedVariation};
pub use scripts::ScriptSupport;
pub use style::{weight_style, FontStyle, WeightStyle};

/// Discover every font under `root` and inspect each one, in parallel.
/// Unparseable files are dropped from the result.
pub fn scan(root: impl AsRef<Path>) -> Vec<FontFaceInfo> {
    let paths = discovery::locate(root);
    inspect::inspect_all(&paths, None)
}
