//! Text format for recipe files.
//!
//! A recipe file is a `# title` heading followed by sections, each opened by a
//! marker line such as `[step]`:
//!
//! ```text
//! # Weeknight Stir-Fry
//!
//! [hero]
//! servings: 2
//!
//! [ingredients]
//! - name=Garlic | amount=2 cloves | icon=drop.fill
//!
//! [step]
//! title: Boil noodles
//! time: 8m
//! heat: high
//! text: Boil noodles\nuntil al dente.
//! ```
//!
//! [`decode`] accepts anything and degrades gracefully; [`encode`] writes the
//! canonical form. Encoding then decoding gives back an equal [`Document`]
//! (block ids aside), but decoding then encoding hand-written text may
//! reorder fields and normalise whitespace.
//!
//! [`Document`]: crate::models::Document

pub mod decode;
pub mod duration;
pub mod encode;
pub mod fields;

pub use decode::decode;
pub use duration::parse_duration_minutes;
pub use encode::encode;
