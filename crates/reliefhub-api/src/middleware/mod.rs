//! HTTP middleware: logging, fault reporting, panic recovery, CORS,
//! bootstrap gating and role guards.

pub mod bootstrap;
pub mod cors;
pub mod fault;
pub mod logging;
pub mod panic;
pub mod rbac;
