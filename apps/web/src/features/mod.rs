//! Feature modules that own client state. Routes stay thin and read from here.

pub(crate) mod auth;
