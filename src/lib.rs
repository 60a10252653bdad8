// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Grid/render math intentionally crosses integer and float domains
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Layout math frequently compares against 0.0, 1.0, etc.
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Computation core for chemistry-themed visual presentations.
//!
//! Kemio converts text phrases into sequences of periodic-table element
//! tiles plus leftover letters, lays them out on a centered grid, and plans
//! morph/appear/disappear transitions between differently-populated tile
//! sets. It produces declarative position and operation data only; drawing,
//! glyph rendering, and animation playback belong to the consuming engine.
//!
//! # Key entry points
//!
//! - [`catalog::ElementCatalog`] - the read-only 118-element table
//! - [`segment::PhraseSegmenter`] - memoized phrase-to-token segmentation
//! - [`layout::PhraseLayout`] - grid layout and render-space mapping
//! - [`scene::ElementGroup`] - pooled tile instances and transition planning
//! - [`options::Options`] - runtime configuration (layout, display)
//!
//! # Architecture
//!
//! Text phrases flow through [`segment::PhraseSegmenter`] into token
//! sequences, through [`layout::PhraseLayout`] into positioned tiles, and
//! into [`scene::ElementGroup`] collections. Transitioning one group into
//! another yields a [`scene::TransitionPlan`] - an unordered operation set
//! the external renderer executes as a single transaction.

pub mod catalog;
pub mod error;
pub mod layout;
pub mod options;
pub mod scene;
pub mod segment;
pub mod util;
