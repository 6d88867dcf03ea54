mod cli;
mod logger;
mod output;
