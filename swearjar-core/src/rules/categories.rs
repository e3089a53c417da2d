//! Well-known category tags used by the bundled rule source.
//!
//! Tags are opaque strings; a rule source may introduce others, and the
//! engine never checks membership in this list.

pub const BLASPHEMY: &str = "blasphemy";
pub const DISCRIMINATORY: &str = "discriminatory";
pub const INAPPROPRIATE: &str = "inappropriate";
pub const INSULT: &str = "insult";
pub const SEXUAL: &str = "sexual";

