mod common;
mod router;
mod session;
