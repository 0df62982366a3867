pub mod trivia_service;
