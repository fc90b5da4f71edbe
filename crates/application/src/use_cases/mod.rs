pub mod dns;

pub use dns::AnswerQuestionUseCase;
