mod command;
mod parse;
