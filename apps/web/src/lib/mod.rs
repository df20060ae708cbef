//! Browser glue for the registry library: runtime configuration, the
//! `localStorage` backend for the session store, and console logging.
//! Nothing here holds secrets; tokens only pass through the session store.

pub(crate) mod config;
pub(crate) mod logging;
pub(crate) mod storage;

pub(crate) const GIT_SHA: &str = env!("HWR_WEB_GIT_SHA");

pub(crate) use storage::session_store;
