//! Request processing shared by all routes: session wrappers, the authentication
//! guard and error page rendering.

pub mod auth;
pub mod error_page;
pub mod session;

#[cfg(test)]
mod test;
