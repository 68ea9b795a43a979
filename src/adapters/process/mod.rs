pub mod compose_runner;
