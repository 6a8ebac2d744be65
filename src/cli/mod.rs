// Interactive front end: the numbered menu and the session that drives it.

pub mod menu;

pub use menu::{MenuChoice, MenuError, Session, SessionState};
