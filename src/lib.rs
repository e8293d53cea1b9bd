//! sourcelist — the content source model behind a feed filter list.
//!
//! * **`source`** — [`Source`](source::Source), its provider variants, and
//!   the display ordering.
//!
//! The `sourcelist` binary builds a source list and prints it in display
//! order.

pub mod source;
