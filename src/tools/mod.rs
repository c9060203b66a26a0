mod path_validator;
mod tokenizer;
mod user;

pub use path_validator::validate_file_exists;
pub use tokenizer::split_words;
pub use user::{User, load_users_from_file};
