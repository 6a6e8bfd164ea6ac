//! Wire layout description for the supported protocol version.
//!
//! The registry is the single source of truth for field order, primitive
//! widths and encoded packet lengths. It is built once at startup and passed
//! into the dispatcher; the typed decoders in [`crate::packets`] follow the
//! same field order, which the layout tests cross-check.

mod f1_2019;
mod layout;

pub use layout::{FieldDef, LayoutEntry, LayoutRegistry, PacketLayout, PrimType};
