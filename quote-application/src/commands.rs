pub mod quote_commands;
