use colored::Colorize;

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "Error:".bold().red(), message.red());
}

/// Print a hint on how to recover from an error
pub fn hint_message(message: &str) {
    eprintln!("{} {}", "hint:".cyan(), message);
}
