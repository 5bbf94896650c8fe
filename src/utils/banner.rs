// file: src/utils/banner.rs
// description: start-up ascii art banner

use colored::*;

const BANNER: [&str; 5] = [
    "     _ _____ _     _____  __",
    "    | | ____| |   / _ \\ \\/ /",
    " _  | |  _| | |  | | | \\  / ",
    "| |_| | |___| |__| |_| /  \\ ",
    " \\___/|_____|_____\\___/_/\\_\\",
];

pub fn banner() -> String {
    BANNER
        .iter()
        .map(|line| line.cyan().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_banner() {
    eprintln!("{}", banner());
}
