//! CLI command implementations.

pub(crate) mod actions;
pub(crate) mod run;

pub(crate) use actions::ActionsArgs;
pub(crate) use run::RunArgs;
