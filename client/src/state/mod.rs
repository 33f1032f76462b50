//! Page state and flow logic.
//!
//! DESIGN
//! ======
//! State structs are plain data driven through `RwSignal`s by the pages. The
//! submit flows live here rather than in the components so they can run
//! under native unit tests with a mock API and in-memory session store.

pub mod effect;
pub mod login;
pub mod session;
pub mod signup;
pub mod toast;
