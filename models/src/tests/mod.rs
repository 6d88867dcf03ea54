mod identify_builder;
mod package;
mod student;
