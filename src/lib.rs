pub mod favicon;
