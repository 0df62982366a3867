pub mod trivia_dto;
