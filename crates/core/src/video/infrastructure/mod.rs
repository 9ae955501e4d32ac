pub mod json_lines_reader;
pub mod json_lines_writer;
