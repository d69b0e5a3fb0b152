// App layer: turns CLI commands into catalog queries and renders the answers.

pub mod commands;
