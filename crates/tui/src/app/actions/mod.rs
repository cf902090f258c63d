//! Actions bound to keys.
//!
//! Every action has the signature `fn(&mut App) -> anyhow::Result<()>` so it
//! can be registered in a mode's handler list. Actions never perform I/O;
//! they queue `SideEffect`s instead.

pub mod channels;
pub mod editor;
pub mod messages;
pub mod scroll;
pub mod system;
pub mod urls;
