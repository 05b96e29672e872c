pub mod domains;
pub mod evaluate;
pub mod health;
pub mod questionnaire;
pub mod submit;
