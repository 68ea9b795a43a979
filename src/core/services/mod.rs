pub mod compose_files;
