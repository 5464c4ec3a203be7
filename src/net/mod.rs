//! Outbound path to the live-page socket.

pub mod push;
