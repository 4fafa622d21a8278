//! Library half of the `crm-access` binary, split out so commands can be
//! driven from integration tests.

pub mod cli;
pub mod commands;
pub mod logging;
