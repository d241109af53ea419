//! Page-owned client state.
//!
//! DESIGN
//! ======
//! Only the home page holds state beyond a single render: the loaded
//! experience list and which entry is expanded.

pub mod home;
