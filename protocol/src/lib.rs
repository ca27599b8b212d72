//! Wire-level types shared between the game core and a chat transport.
//!
//! Inbound, a transport turns typed commands ([`Command`]) and button taps
//! ([`Callback`]) into [`Action`]s. Outbound, it draws a [`Reply`], whose
//! [`Keyboard`] is built from the core's board view.

pub use action::*;
pub use command::*;
pub use error::*;
pub use keyboard::*;
pub use lexicon::*;
pub use reply::*;
pub use token::*;

mod action;
mod command;
mod error;
mod keyboard;
mod lexicon;
mod reply;
mod token;
