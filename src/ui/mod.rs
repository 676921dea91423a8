//! Console output helpers

use console::Style;

pub fn success(message: &str) {
    println!("{}", Style::new().green().apply_to(message));
}

pub fn info(message: &str) {
    println!("{message}");
}

pub fn heading(message: &str) {
    println!("{}", Style::new().blue().bold().apply_to(message));
}

pub fn dim(message: &str) {
    println!("{}", Style::new().dim().apply_to(message));
}
