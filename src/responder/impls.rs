pub mod log_challenge_handler;
