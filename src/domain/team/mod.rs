//! Team view domain module
//!
//! The team view is the read-only aggregate of an account, its active members
//! and its pending invitations. It is rebuilt on every request.

mod view;

pub use view::TeamView;
