//! Listener side of the server: passive socket setup and the accept loop.

pub mod listener;
