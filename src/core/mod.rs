pub mod waterbutler;
